// Error types for booking operations

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

/// Errors that can occur while validating or mutating bookings.
///
/// All of these are terminal for the current request; nothing here is
/// retried internally. `SeatUnavailable` is the one condition a client is
/// expected to retry after refreshing availability.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Event does not exist
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    /// Event exists but is not open for booking (e.g. cancelled)
    #[error("Event is not bookable: {0}")]
    EventNotBookable(Uuid),

    /// Event has a seat plan but the request selected no seats
    #[error("Please select seats")]
    SeatSelectionRequired,

    /// One or more requested seats are already held by an active booking
    #[error("One or more seats are not available")]
    SeatUnavailable,

    /// Counter-mode event has no tickets left
    #[error("No tickets available")]
    SoldOut,

    /// Booking does not exist
    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    /// Caller does not own the booking
    #[error("Not your booking")]
    Forbidden,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
