// Availability & booking engine
//
// Pure domain logic shared by the API and storage layers:
// - seat-plan model (sectioned / itemized / absent)
// - availability projection (which seats are free right now)
// - booking validation & pricing
//
// No I/O here: callers fetch the event and the booked-seat set, this crate
// decides what is free, what a request costs, and whether it is valid.

pub mod availability;
pub mod booking;
pub mod error;
pub mod seat_plan;

pub use availability::{available_seats, seat_count, seat_price, SeatDescriptor};
pub use booking::{validate_booking, BookableEvent, BookingRequest, PricedBooking};
pub use error::{BookingError, Result};
pub use seat_plan::{Seat, SeatPlan, Section};
