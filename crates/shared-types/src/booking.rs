use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::NoticeKind;

/// Default start of the borrow window.
pub const DEFAULT_START_TIME: &str = "07:00";
/// Default end of the borrow window.
pub const DEFAULT_END_TIME: &str = "11:00";
/// Lower bound advertised on quantity inputs. Not enforced on submit.
pub const MIN_QUANTITY_HINT: f64 = 0.1;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("float pattern is valid")
});

static INT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("integer pattern is valid"));

/// Supply category. Only chemicals may be ordered in fractional amounts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Chemical,
    #[default]
    Unspecified,
    Other(String),
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CHEMICAL" => Category::Chemical,
            "" => Category::Unspecified,
            _ => Category::Other(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Chemical => "CHEMICAL".to_string(),
            Category::Unspecified => String::new(),
            Category::Other(raw) => raw,
        }
    }
}

impl Category {
    pub fn is_chemical(&self) -> bool {
        matches!(self, Category::Chemical)
    }

    /// Step exposed on the quantity input.
    pub fn quantity_step(&self) -> f64 {
        if self.is_chemical() {
            0.1
        } else {
            1.0
        }
    }

    /// Whether a keystroke should be swallowed by the quantity input.
    ///
    /// Only decimal separators on non-chemical items are blocked. Pasted or
    /// programmatic values still reach [`change_quantity`] unfiltered.
    pub fn blocks_key(&self, key: &str) -> bool {
        !self.is_chemical() && matches!(key, "." | ",")
    }
}

/// An entry of the supply catalogue a teacher can add to the basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyItem {
    #[serde(alias = "id")]
    pub item_id: i64,
    pub name: String,
    #[serde(default)]
    pub available_qty: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category_type: Category,
}

/// A supply selected for borrowing, with the quantity being requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub id: i64,
    pub name: String,
    pub available_qty: f64,
    pub unit: String,
    pub category_type: Category,
    pub order_qty: f64,
}

impl From<&SupplyItem> for BasketItem {
    fn from(item: &SupplyItem) -> Self {
        Self {
            id: item.item_id,
            name: item.name.clone(),
            available_qty: item.available_qty,
            unit: item.unit.clone(),
            category_type: item.category_type.clone(),
            order_qty: 1.0,
        }
    }
}

/// Parse the longest leading float, the way browsers parse number inputs.
fn parse_float_prefix(raw: &str) -> Option<f64> {
    FLOAT_PREFIX_RE
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Interpret a raw quantity input.
///
/// Negative values are rejected (`None`). Unparseable input becomes `0`.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    match parse_float_prefix(raw) {
        Some(q) if q < 0.0 => None,
        Some(q) if q.is_finite() && q != 0.0 => Some(q),
        _ => Some(0.0),
    }
}

/// Apply a raw quantity edit to the matching basket entry.
///
/// Returns `false` when the input was rejected and nothing changed.
pub fn change_quantity(basket: &mut [BasketItem], item_id: i64, raw: &str) -> bool {
    let Some(qty) = parse_quantity(raw) else {
        return false;
    };
    for item in basket.iter_mut().filter(|i| i.id == item_id) {
        item.order_qty = qty;
    }
    true
}

pub fn remove_item(basket: &mut Vec<BasketItem>, item_id: i64) {
    basket.retain(|i| i.id != item_id);
}

/// Append a catalogue item with quantity 1. Items already present are left as is.
///
/// Returns `true` when the basket grew.
pub fn add_to_basket(basket: &mut Vec<BasketItem>, item: &SupplyItem) -> bool {
    if basket.iter().any(|b| b.id == item.item_id) {
        return false;
    }
    basket.push(BasketItem::from(item));
    true
}

/// One requested supply in a [`BookingPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLine {
    pub item_id: i64,
    pub quantity: f64,
}

/// Body of a borrow request submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub room_id: i64,
    pub borrow_date: String,
    pub expected_return_date: String,
    pub items: Vec<BookingLine>,
}

/// Why a booking could not be submitted. `Display` is the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Vui lòng chọn ít nhất một vật tư!")]
    EmptyBasket,
    #[error("Vui lòng chọn phòng thí nghiệm!")]
    RoomNotSelected,
    #[error("Vui lòng chọn đầy đủ ngày mượn và ngày trả!")]
    MissingDates,
    #[error("Thời gian trả phải sau thời gian mượn!")]
    InvalidTimeRange,
}

impl BookingError {
    pub fn title(&self) -> &'static str {
        match self {
            BookingError::EmptyBasket => "Giỏ hàng trống",
            BookingError::RoomNotSelected => "Chưa chọn phòng",
            BookingError::MissingDates => "Thiếu thời gian",
            BookingError::InvalidTimeRange => "Thời gian không hợp lệ",
        }
    }

    pub fn kind(&self) -> NoticeKind {
        match self {
            BookingError::InvalidTimeRange => NoticeKind::Error,
            _ => NoticeKind::Warning,
        }
    }
}

/// Join a `YYYY-MM-DD` date and an `HH:mm` time into `YYYY-MM-DDTHH:mm:00`.
pub fn compose_timestamp(date: &str, time: &str) -> String {
    format!("{date}T{time}:00")
}

/// Editable fields of the booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    /// Selected room id as the picker reports it; empty means none.
    pub room_id: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl BookingDraft {
    /// A draft for `today` with the default morning window.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_window(today, DEFAULT_START_TIME, DEFAULT_END_TIME)
    }

    pub fn with_window(today: NaiveDate, start_time: &str, end_time: &str) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            room_id: String::new(),
            start_date: date.clone(),
            start_time: start_time.to_string(),
            end_date: date,
            end_time: end_time.to_string(),
        }
    }

    pub fn borrow_timestamp(&self) -> String {
        compose_timestamp(&self.start_date, &self.start_time)
    }

    pub fn return_timestamp(&self) -> String {
        compose_timestamp(&self.end_date, &self.end_time)
    }

    /// Validate the draft against `basket` and build the submission body.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn build_payload(&self, basket: &[BasketItem]) -> Result<BookingPayload, BookingError> {
        if basket.is_empty() {
            return Err(BookingError::EmptyBasket);
        }
        let room_id = INT_PREFIX_RE
            .find(self.room_id.trim())
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .ok_or(BookingError::RoomNotSelected)?;
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err(BookingError::MissingDates);
        }

        let borrow_date = self.borrow_timestamp();
        let expected_return_date = self.return_timestamp();
        let start = NaiveDateTime::parse_from_str(&borrow_date, TIMESTAMP_FORMAT);
        let end = NaiveDateTime::parse_from_str(&expected_return_date, TIMESTAMP_FORMAT);
        match (start, end) {
            (Ok(start), Ok(end)) if start < end => {}
            _ => return Err(BookingError::InvalidTimeRange),
        }

        Ok(BookingPayload {
            room_id,
            borrow_date,
            expected_return_date,
            items: basket
                .iter()
                .map(|item| BookingLine {
                    item_id: item.id,
                    quantity: item.order_qty,
                })
                .collect(),
        })
    }
}
