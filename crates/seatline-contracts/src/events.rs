// Event-related DTOs for public API

use chrono::{DateTime, Utc};
use seatline_core::{SeatDescriptor, SeatPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Active,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Active => write!(f, "active"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl From<&str> for EventStatus {
    fn from(s: &str) -> Self {
        match s {
            "cancelled" => EventStatus::Cancelled,
            _ => EventStatus::Active,
        }
    }
}

/// Event with its computed availability snapshot.
///
/// `available_seats` is `None` for events without a seat plan; their
/// availability is `available_tickets`. `seat_count` is the total capacity
/// regardless of plan shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub source: String,
    pub destination: String,
    pub image_url: Option<String>,
    pub price: f64,
    pub available_tickets: i32,
    pub seat_plan: Option<SeatPlan>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub available_seats: Option<Vec<SeatDescriptor>>,
    pub seat_count: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form category, e.g. "concert", "sports", "bus"
    #[serde(default = "default_category")]
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub available_tickets: i32,
    #[serde(default)]
    pub seat_plan: Option<SeatPlan>,
    #[serde(default)]
    pub status: Option<EventStatus>,
}

fn default_category() -> String {
    "event".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub available_tickets: Option<i32>,
    pub seat_plan: Option<SeatPlan>,
    pub status: Option<EventStatus>,
}
