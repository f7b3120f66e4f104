mod booking_form;

use crate::api::RestClient;
use crate::borrow_desk::{BorrowCatalog, BorrowDesk};
use crate::notify::{use_notifier, UiNotifier};
use booking_form::BookingForm;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFlaskConical, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{BasketItem, BookingPayload, SupplyItem};
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader};

type Desk = BorrowDesk<RestClient, UiNotifier, Signal<BorrowCatalog>, Signal<Vec<BasketItem>>>;

/// Teacher screen: pick supplies from the catalogue and file a borrow request.
#[component]
pub fn TeacherBorrow() -> Element {
    let client = use_context::<RestClient>();
    let notifier = use_notifier();
    let catalog = use_signal(BorrowCatalog::default);
    let basket = use_signal(Vec::<BasketItem>::new);
    let desk: Desk = use_context_provider(|| BorrowDesk::new(client, notifier, catalog, basket));

    let loader = desk.clone();
    use_hook(move || {
        spawn(async move { loader.load_catalog().await });
    });

    let c = catalog.read();
    let loading = c.loading;
    let rooms = c.rooms.clone();
    let supplies = c.supplies.clone();
    drop(c);

    let clear_desk = desk.clone();
    let submit_desk = desk.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./teacher_borrow.css") }

        div { class: "teacher-borrow-page",
            Card { class: "supply-catalog",
                CardHeader {
                    title: rsx! {
                        Icon::<LdFlaskConical> { icon: LdFlaskConical, width: 20, height: 20 }
                        " Danh mục vật tư"
                    },
                }
                CardContent {
                    if loading {
                        div { class: "catalog-loading", "Đang tải dữ liệu..." }
                    } else if supplies.is_empty() {
                        div { class: "catalog-empty", "Không có vật tư nào" }
                    } else {
                        div { class: "catalog-grid",
                            for supply in supplies {
                                SupplyCard { key: "{supply.item_id}", supply }
                            }
                        }
                    }
                }
            }

            BookingForm {
                basket,
                rooms,
                on_clear: move |_| clear_desk.clear_basket(),
                on_submit: move |payload: BookingPayload| {
                    let desk = submit_desk.clone();
                    spawn(async move {
                        desk.submit_booking(payload).await;
                    });
                },
            }
        }
    }
}

#[component]
fn SupplyCard(supply: SupplyItem) -> Element {
    let desk = use_context::<Desk>();
    let category = if supply.category_type.is_chemical() {
        Some("Hóa chất")
    } else {
        None
    };
    let item = supply.clone();

    rsx! {
        div { class: "supply-card",
            div { class: "supply-name", "{supply.name}" }
            div { class: "supply-stock",
                "Kho: {supply.available_qty} {supply.unit}"
                if let Some(label) = category {
                    Badge { variant: BadgeVariant::Accent, "{label}" }
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    desk.add_to_basket(&item);
                },
                Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                " Thêm"
            }
        }
    }
}
