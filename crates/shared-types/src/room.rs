use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor of a room; the backend sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Floor {
    Number(i64),
    Text(String),
}

impl Floor {
    /// Zero and the empty string mean "no floor".
    fn is_present(&self) -> bool {
        match self {
            Floor::Number(n) => *n != 0,
            Floor::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Floor::Number(n) => write!(f, "{n}"),
            Floor::Text(s) => f.write_str(s),
        }
    }
}

/// A laboratory room that can be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: i64,
    pub room_name: String,
    #[serde(default)]
    pub floor: Option<Floor>,
}

impl Room {
    /// Option label for the room picker, e.g. `Phòng Hóa 1 (Tầng 2)`.
    pub fn label(&self) -> String {
        match self.floor.as_ref().filter(|f| f.is_present()) {
            Some(floor) => format!("{} (Tầng {floor})", self.room_name),
            None => self.room_name.clone(),
        }
    }
}
