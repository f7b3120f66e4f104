use crate::booking_form::BookingRequestForm;
use crate::config;
use crate::notify::use_notifier;
use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClipboardList, LdClock, LdMapPin, LdSend, LdTrash2,
};
use dioxus_free_icons::Icon;
use shared_types::{BasketItem, BookingDraft, BookingPayload, Room, MIN_QUANTITY_HINT};
use shared_ui::{Button, ButtonVariant, FormSelect, Input};

/// Borrow request form: room, time window and the basket being requested.
///
/// The basket belongs to the caller; the form only edits quantities and
/// removes entries. A valid submission is handed to `on_submit`.
#[component]
pub fn BookingForm(
    basket: Signal<Vec<BasketItem>>,
    rooms: Vec<Room>,
    on_clear: EventHandler<()>,
    on_submit: EventHandler<BookingPayload>,
) -> Element {
    let notifier = use_notifier();
    let mut draft = use_signal(|| {
        let defaults = &config::load().booking;
        BookingDraft::with_window(
            Local::now().date_naive(),
            &defaults.start_time,
            &defaults.end_time,
        )
    });
    let form = BookingRequestForm::new(notifier, basket, draft);

    let d = draft.read().clone();
    let items = basket.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./booking_form.css") }

        div { class: "booking-form",
            div { class: "booking-form-header",
                h3 {
                    Icon::<LdClipboardList> { icon: LdClipboardList, width: 20, height: 20 }
                    " Phiếu Đăng Ký"
                }
                if !items.is_empty() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_clear.call(()),
                        Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                        " Xóa hết"
                    }
                }
            }

            FormSelect {
                value: d.room_id.clone(),
                label: rsx! {
                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                    " Phòng thí nghiệm"
                },
                on_change: move |v: String| draft.write().room_id = v,
                option { value: "", "-- Chọn phòng --" }
                for room in rooms.iter() {
                    option { key: "{room.room_id}", value: "{room.room_id}", "{room.label()}" }
                }
            }

            div { class: "booking-time-grid",
                Input {
                    input_type: "date",
                    value: d.start_date.clone(),
                    label: rsx! {
                        Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        " Ngày mượn"
                    },
                    on_input: move |v: String| draft.write().start_date = v,
                }
                Input {
                    input_type: "time",
                    value: d.start_time.clone(),
                    label: rsx! {
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        " Bắt đầu"
                    },
                    on_input: move |v: String| draft.write().start_time = v,
                }
                Input {
                    input_type: "date",
                    value: d.end_date.clone(),
                    label: rsx! {
                        Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        " Ngày trả"
                    },
                    on_input: move |v: String| draft.write().end_date = v,
                }
                Input {
                    input_type: "time",
                    value: d.end_time.clone(),
                    label: rsx! {
                        Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                        " Kết thúc"
                    },
                    on_input: move |v: String| draft.write().end_time = v,
                }
            }

            div { class: "basket",
                div { class: "basket-title", "Danh sách vật tư ({items.len()})" }
                if items.is_empty() {
                    div { class: "empty-basket-msg", "Chưa chọn vật tư nào" }
                }
                for item in items {
                    BasketRow { key: "{item.id}", item, basket, draft }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "submit-ticket-btn",
                onclick: move |_| {
                    form.submit(|payload| on_submit.call(payload));
                },
                Icon::<LdSend> { icon: LdSend, width: 18, height: 18 }
                " GỬI YÊU CẦU"
            }
        }
    }
}

#[component]
fn BasketRow(
    item: BasketItem,
    basket: Signal<Vec<BasketItem>>,
    draft: Signal<BookingDraft>,
) -> Element {
    let notifier = use_notifier();
    let form = BookingRequestForm::new(notifier, basket, draft);

    let id = item.id;
    let category = item.category_type.clone();
    let step = category.quantity_step().to_string();
    // Fractions on countable items are shown, not corrected.
    let qty_class = if !category.is_chemical() && item.order_qty.fract() != 0.0 {
        "qty-small no-spinners qty-flagged"
    } else {
        "qty-small no-spinners"
    };

    rsx! {
        div { class: "basket-row-item",
            div { class: "item-display-name",
                "{item.name}"
                span { class: "stock-hint", " (Kho: {item.available_qty} {item.unit})" }
            }
            div { class: "item-row-actions",
                Input {
                    input_type: "number",
                    class: qty_class,
                    value: item.order_qty.to_string(),
                    min: MIN_QUANTITY_HINT.to_string(),
                    step,
                    on_keydown: move |evt: KeyboardEvent| {
                        if let Key::Character(c) = evt.key() {
                            if category.blocks_key(&c) {
                                evt.prevent_default();
                            }
                        }
                    },
                    on_input: move |raw: String| {
                        form.change_quantity(id, &raw);
                    },
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    hint: "Xóa món này".to_string(),
                    onclick: move |_| form.remove_item(id),
                    Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                }
            }
        }
    }
}
