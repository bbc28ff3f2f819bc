// Booking-related DTOs for public API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Payment status of a booking (simulated payment: PENDING until the user
/// completes checkout, then SUCCESS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Success,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Success => write!(f, "SUCCESS"),
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "SUCCESS" => PaymentStatus::Success,
            _ => PaymentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub event_id: Uuid,
    pub quantity: i32,
    /// Required (non-empty) for events with a seat plan, ignored otherwise
    #[serde(default)]
    pub selected_seats: Vec<String>,
}

/// Booking creation returns only the id; clients fetch details separately
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingResponse {
    pub id: Uuid,
}

/// A user's booking joined with event display fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub event: Uuid,
    pub user: Uuid,
    pub event_title: String,
    pub event_date: DateTime<Utc>,
    /// Event base price, formatted with two decimals
    pub event_price: String,
    pub event_category: String,
    pub quantity: i32,
    pub selected_seats: Vec<String>,
    /// Total charged, formatted with two decimals
    pub total_amount: String,
    pub payment_status: PaymentStatus,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin view of a booking: the user fields are joined in as well
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminBooking {
    pub id: Uuid,
    pub user: Uuid,
    pub user_username: String,
    pub user_email: String,
    pub event: Uuid,
    pub event_title: String,
    pub event_date: DateTime<Utc>,
    pub event_price: String,
    pub event_category: String,
    pub quantity: i32,
    pub selected_seats: Vec<String>,
    pub total_amount: String,
    pub payment_status: PaymentStatus,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of completing the simulated payment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub payment_status: PaymentStatus,
}
