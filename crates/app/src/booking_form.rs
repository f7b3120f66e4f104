//! Basket editing and submission checks for the booking request form.

use crate::notify::Notifier;
use crate::state::StateCell;
use shared_types::{self as types, BasketItem, BookingDraft, BookingPayload, Notice};

/// Form logic over a caller-owned basket and a form-owned draft.
#[derive(Clone, Copy)]
pub struct BookingRequestForm<N, B, D> {
    notifier: N,
    basket: B,
    draft: D,
}

impl<N, B, D> BookingRequestForm<N, B, D>
where
    N: Notifier,
    B: StateCell<Vec<BasketItem>>,
    D: StateCell<BookingDraft>,
{
    pub fn new(notifier: N, basket: B, draft: D) -> Self {
        Self {
            notifier,
            basket,
            draft,
        }
    }

    /// Apply a raw quantity typed by the user. Negative input is ignored.
    pub fn change_quantity(&self, item_id: i64, raw: &str) -> bool {
        let applied = self
            .basket
            .update(|basket| types::change_quantity(basket, item_id, raw));
        if !applied {
            tracing::debug!(item_id, raw, "ignored negative quantity");
        }
        applied
    }

    pub fn remove_item(&self, item_id: i64) {
        self.basket
            .update(|basket| types::remove_item(basket, item_id));
    }

    /// Validate the form and hand the payload to `on_submit`.
    ///
    /// The first failing check is reported through the notifier and
    /// `on_submit` is not called.
    pub fn submit(&self, on_submit: impl FnOnce(BookingPayload)) -> bool {
        let result = self
            .basket
            .inspect(|basket| self.draft.inspect(|draft| draft.build_payload(basket)));

        match result {
            Ok(payload) => {
                tracing::debug!(
                    room_id = payload.room_id,
                    lines = payload.items.len(),
                    "booking request ready"
                );
                on_submit(payload);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "booking request rejected");
                self.notifier.notify(Notice::from(err));
                false
            }
        }
    }
}
