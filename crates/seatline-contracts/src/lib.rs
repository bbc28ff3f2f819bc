// Public API DTOs
//
// Request/response shapes for the HTTP surface. Internal row models live in
// seatline-storage; the seat-plan and availability types come from
// seatline-core and are re-exported here for API consumers.

pub mod auth;
pub mod bookings;
pub mod common;
pub mod events;
pub mod stats;
pub mod users;

pub use auth::*;
pub use bookings::*;
pub use common::*;
pub use events::*;
pub use stats::*;
pub use users::*;

pub use seatline_core::{Seat, SeatDescriptor, SeatPlan, Section};
