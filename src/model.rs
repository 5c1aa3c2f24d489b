//! Bus records as exchanged with the `/api/buses` resource.
//!
//! A [`BusDraft`] carries every field except the server-assigned id; a
//! [`Bus`] is a draft plus its id. Both serialize to the flat JSON shape
//! the API expects.
//!
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned bus identifier.
pub type BusId = i64;

/// Capacity a new draft starts with.
pub const DEFAULT_CAPACITY: u32 = 40;

/// Service class of a bus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusType {
    #[default]
    Express,
    Deluxe,
    Sleeper,
}

impl BusType {
    pub const ALL: [BusType; 3] = [BusType::Express, BusType::Deluxe, BusType::Sleeper];

    pub fn as_str(self) -> &'static str {
        match self {
            BusType::Express => "Express",
            BusType::Deluxe => "Deluxe",
            BusType::Sleeper => "Sleeper",
        }
    }

    /// Next entry of the type selector, wrapping around.
    pub fn next(self) -> Self {
        match self {
            BusType::Express => BusType::Deluxe,
            BusType::Deluxe => BusType::Sleeper,
            BusType::Sleeper => BusType::Express,
        }
    }

    /// Previous entry of the type selector, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            BusType::Express => BusType::Sleeper,
            BusType::Deluxe => BusType::Express,
            BusType::Sleeper => BusType::Deluxe,
        }
    }
}

impl Display for BusType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bus record that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusDraft {
    pub bus_number: String,
    #[serde(rename = "type")]
    pub bus_type: BusType,
    pub capacity: u32,
    pub last_maintenance: String,
    pub next_maintenance: String,
}

impl Default for BusDraft {
    fn default() -> Self {
        Self {
            bus_number: String::new(),
            bus_type: BusType::Express,
            capacity: DEFAULT_CAPACITY,
            last_maintenance: String::new(),
            next_maintenance: String::new(),
        }
    }
}

/// A bus record as stored by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    pub id: BusId,
    #[serde(flatten)]
    pub info: BusDraft,
}

impl Bus {
    pub fn new(id: BusId, info: BusDraft) -> Self {
        Self { id, info }
    }
}

/// Body of `DELETE /api/buses`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: BusId,
}

/// Render an ISO date for the table (`2024-06-01` -> `6/1/2024`).
///
/// Only the first ten characters are considered so full timestamps render
/// as their date. Anything that does not parse is shown unchanged.
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    let head = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}
