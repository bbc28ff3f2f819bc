// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use seatline_core::{BookableEvent, SeatPlan};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// User models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

// ============================================
// Event models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
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
    pub seat_plan: Option<Json<SeatPlan>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl EventRow {
    /// Project the facts the booking validator needs
    pub fn to_bookable(&self) -> BookableEvent {
        BookableEvent {
            id: self.id,
            price: self.price,
            is_active: self.status == "active",
            seat_plan: self.seat_plan.as_ref().map(|p| p.0.clone()),
            available_tickets: self.available_tickets,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEvent {
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
    pub status: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
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
    pub status: Option<String>,
}

/// Optional filters for the public event listing
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub date: Option<chrono::NaiveDate>,
}

// ============================================
// Booking models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub quantity: i32,
    pub selected_seats: Json<Vec<String>>,
    pub total_amount: f64,
    pub payment_status: String,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
}

/// Booking joined with event display fields (user-facing listing)
#[derive(Debug, Clone, FromRow)]
pub struct BookingWithEventRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub quantity: i32,
    pub selected_seats: Json<Vec<String>>,
    pub total_amount: f64,
    pub payment_status: String,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
    pub event_title: String,
    pub event_date: DateTime<Utc>,
    pub event_price: f64,
    pub event_category: String,
}

/// Booking joined with user and event fields (admin listing)
#[derive(Debug, Clone, FromRow)]
pub struct AdminBookingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub quantity: i32,
    pub selected_seats: Json<Vec<String>>,
    pub total_amount: f64,
    pub payment_status: String,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
    pub user_username: String,
    pub user_email: String,
    pub event_title: String,
    pub event_date: DateTime<Utc>,
    pub event_price: f64,
    pub event_category: String,
}

// ============================================
// Stats models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct StatsRow {
    pub total_users: i64,
    pub total_events: i64,
    pub total_bookings: i64,
    pub payment_success: i64,
    pub payment_pending: i64,
    pub cancelled_bookings: i64,
    pub total_revenue: f64,
}
