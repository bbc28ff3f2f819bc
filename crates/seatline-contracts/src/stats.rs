// Admin statistics DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary statistics over users, events and bookings.
///
/// Payment counts cover non-cancelled bookings only; revenue is the sum of
/// `total_amount` over non-cancelled SUCCESS bookings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_events: i64,
    pub total_bookings: i64,
    pub payment_success: i64,
    pub payment_pending: i64,
    pub cancelled_bookings: i64,
    /// Formatted with two decimals
    pub total_revenue: String,
}
