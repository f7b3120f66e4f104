//! Catalogue loading, basket building and submission for the teacher borrow screen.

use crate::api::BorrowApi;
use crate::notify::Notifier;
use crate::state::StateCell;
use shared_types::{self as types, BasketItem, BookingPayload, Notice, Room, SupplyItem};

pub const CATALOG_FAILED: &str = "Không thể tải dữ liệu phòng và vật tư!";
pub const SUBMITTED: &str = "Gửi yêu cầu thành công!";
pub const SUBMIT_FAILED: &str = "Lỗi khi gửi yêu cầu!";

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowCatalog {
    pub rooms: Vec<Room>,
    pub supplies: Vec<SupplyItem>,
    pub loading: bool,
}

impl Default for BorrowCatalog {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            supplies: Vec::new(),
            loading: true,
        }
    }
}

#[derive(Clone)]
pub struct BorrowDesk<A, N, C, B> {
    api: A,
    notifier: N,
    catalog: C,
    basket: B,
}

impl<A, N, C, B> BorrowDesk<A, N, C, B>
where
    A: BorrowApi,
    N: Notifier,
    C: StateCell<BorrowCatalog>,
    B: StateCell<Vec<BasketItem>>,
{
    pub fn new(api: A, notifier: N, catalog: C, basket: B) -> Self {
        Self {
            api,
            notifier,
            catalog,
            basket,
        }
    }

    /// Fetch rooms and supplies together; either failing leaves the catalogue as it was.
    pub async fn load_catalog(&self) {
        self.catalog.update(|c| c.loading = true);
        let (rooms, supplies) =
            futures::join!(self.api.list_rooms(), self.api.list_supplies());
        self.catalog.update(|c| c.loading = false);

        match rooms.and_then(|rooms| supplies.map(|supplies| (rooms, supplies))) {
            Ok((rooms, supplies)) => {
                tracing::debug!(rooms = rooms.len(), supplies = supplies.len(), "loaded catalogue");
                self.catalog.update(|c| {
                    c.rooms = rooms;
                    c.supplies = supplies;
                });
            }
            Err(err) => {
                tracing::error!(%err, "failed to load catalogue");
                self.notifier.notify(Notice::error(CATALOG_FAILED));
            }
        }
    }

    pub fn add_to_basket(&self, item: &SupplyItem) -> bool {
        self.basket.update(|basket| types::add_to_basket(basket, item))
    }

    pub fn clear_basket(&self) {
        self.basket.update(Vec::clear);
    }

    pub async fn submit_booking(&self, payload: BookingPayload) -> bool {
        match self.api.submit_booking(&payload).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(SUBMITTED));
                self.clear_basket();
                true
            }
            Err(err) => {
                tracing::error!(%err, room_id = payload.room_id, "failed to submit booking");
                self.notifier.notify(Notice::error(err.message_or(SUBMIT_FAILED)));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBorrowApi, FakeNotifier};
    use pretty_assertions::assert_eq;
    use shared_types::{AppError, BookingLine, Category, Floor, NoticeKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Desk = BorrowDesk<
        FakeBorrowApi,
        FakeNotifier,
        Rc<RefCell<BorrowCatalog>>,
        Rc<RefCell<Vec<BasketItem>>>,
    >;

    struct Fixture {
        desk: Desk,
        api: FakeBorrowApi,
        notifier: FakeNotifier,
        catalog: Rc<RefCell<BorrowCatalog>>,
        basket: Rc<RefCell<Vec<BasketItem>>>,
    }

    fn fixture() -> Fixture {
        let api = FakeBorrowApi::default();
        api.rooms.borrow_mut().push(Room {
            room_id: 1,
            room_name: "Phòng Hóa 1".into(),
            floor: Some(Floor::Number(2)),
        });
        api.supplies.borrow_mut().push(supply(10, Category::Chemical));
        let notifier = FakeNotifier::default();
        let catalog = Rc::new(RefCell::new(BorrowCatalog::default()));
        let basket = Rc::new(RefCell::new(Vec::new()));
        Fixture {
            desk: BorrowDesk::new(api.clone(), notifier.clone(), catalog.clone(), basket.clone()),
            api,
            notifier,
            catalog,
            basket,
        }
    }

    fn supply(id: i64, category: Category) -> SupplyItem {
        SupplyItem {
            item_id: id,
            name: "Axit HCl".into(),
            available_qty: 5.0,
            unit: "lít".into(),
            category_type: category,
        }
    }

    fn payload() -> BookingPayload {
        BookingPayload {
            room_id: 1,
            borrow_date: "2024-05-10T07:00:00".into(),
            expected_return_date: "2024-05-10T11:00:00".into(),
            items: vec![BookingLine { item_id: 10, quantity: 1.0 }],
        }
    }

    #[tokio::test]
    async fn load_fills_catalogue() {
        let f = fixture();
        f.desk.load_catalog().await;

        let catalog = f.catalog.borrow();
        assert!(!catalog.loading);
        assert_eq!(catalog.rooms.len(), 1);
        assert_eq!(catalog.supplies.len(), 1);
        assert!(f.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn load_failure_notifies_and_leaves_catalogue_empty() {
        let f = fixture();
        f.api.fail("items", AppError::network("offline"));
        f.desk.load_catalog().await;

        assert!(!f.catalog.borrow().loading);
        assert!(f.catalog.borrow().rooms.is_empty());
        assert_eq!(
            f.notifier.messages(),
            vec![(NoticeKind::Error, CATALOG_FAILED.to_string())]
        );
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let f = fixture();
        let item = supply(10, Category::Chemical);

        assert!(f.desk.add_to_basket(&item));
        assert!(!f.desk.add_to_basket(&item));

        let basket = f.basket.borrow();
        assert_eq!(basket.len(), 1);
        assert_eq!(basket[0].order_qty, 1.0);
    }

    #[tokio::test]
    async fn successful_submission_clears_basket() {
        let f = fixture();
        f.desk.add_to_basket(&supply(10, Category::Chemical));

        assert!(f.desk.submit_booking(payload()).await);

        assert!(f.basket.borrow().is_empty());
        assert_eq!(f.api.submitted.borrow().as_slice(), &[payload()]);
        assert_eq!(
            f.notifier.messages(),
            vec![(NoticeKind::Success, SUBMITTED.to_string())]
        );
    }

    #[tokio::test]
    async fn failed_submission_keeps_basket() {
        let f = fixture();
        f.desk.add_to_basket(&supply(10, Category::Chemical));
        f.api.fail(
            "submit",
            AppError::from_response(400, r#"{"message":"Vật tư không đủ số lượng"}"#),
        );
        assert!(!f.desk.submit_booking(payload()).await);

        f.api.fail("submit", AppError::network("offline"));
        assert!(!f.desk.submit_booking(payload()).await);

        assert_eq!(f.basket.borrow().len(), 1);
        assert_eq!(
            f.notifier.messages(),
            vec![
                (NoticeKind::Error, "Vật tư không đủ số lượng".to_string()),
                (NoticeKind::Error, SUBMIT_FAILED.to_string()),
            ]
        );
    }
}
