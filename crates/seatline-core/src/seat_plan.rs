// Seat-plan model
//
// An event sells seats in exactly one of three shapes:
// - sectioned: named capacity blocks, seats are numbered positions within a
//   section and identified as "{section_id}-{n}"
// - itemized: an explicit list of individually priced seats
// - absent (no plan on the event): plain ticket counter, no seat identity
//
// The wire/storage shape is the raw JSON the admin API accepts:
// {"sections":[...]} or {"seats":[...]}.

use serde::{Deserialize, Serialize};

/// Structured seating definition for an event.
///
/// Stored as JSONB on the event row; `None` on the event means the event is
/// sold by ticket count only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum SeatPlan {
    /// Capacity blocks; concrete seats are derived as "{section_id}-{n}"
    Sectioned { sections: Vec<Section> },
    /// Explicit per-seat list
    Itemized { seats: Vec<Seat> },
}

/// A named capacity block (e.g. a stadium stand or a bus deck)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub capacity: u32,
    pub price: f64,
}

/// An individually identified seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Seat {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub price: f64,
}

impl SeatPlan {
    /// Seat identifier for position `n` within a section
    pub fn section_seat_id(section_id: &str, n: u32) -> String {
        format!("{}-{}", section_id, n)
    }

    /// Check that section/seat ids are unique within the plan.
    ///
    /// Returns the first duplicate id, if any. Enforced at event
    /// create/update time so the booking path can assume unique ids.
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        match self {
            SeatPlan::Sectioned { sections } => sections
                .iter()
                .find(|s| !seen.insert(s.id.as_str()))
                .map(|s| s.id.as_str()),
            SeatPlan::Itemized { seats } => seats
                .iter()
                .find(|s| !seen.insert(s.id.as_str()))
                .map(|s| s.id.as_str()),
        }
    }
}
