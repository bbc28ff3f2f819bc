// Service layer: business logic between the route handlers and storage

pub mod admin;
pub mod booking;
pub mod event;

pub use admin::AdminService;
pub use booking::BookingService;
pub use event::EventService;

/// Money fields cross the wire as strings with two decimals
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(80.0), "80.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(19.995), "20.00");
    }
}
