// Booking validation & pricing
//
// Pure check-and-price step of booking creation. The storage layer runs it
// inside the per-event transaction so the booked set is read under the same
// lock that guards the insert.

use std::collections::HashSet;

use uuid::Uuid;

use crate::availability::seat_price;
use crate::error::BookingError;
use crate::seat_plan::SeatPlan;

/// The event facts the validator needs, detached from storage rows
#[derive(Debug, Clone)]
pub struct BookableEvent {
    pub id: Uuid,
    /// Flat/base price; per-seat prices fall back to this
    pub price: f64,
    pub is_active: bool,
    pub seat_plan: Option<SeatPlan>,
    /// Remaining ticket counter, used only when `seat_plan` is `None`
    pub available_tickets: i32,
}

/// A booking request as submitted by the user
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub quantity: i32,
    pub selected_seats: Vec<String>,
}

/// Validated, priced booking ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct PricedBooking {
    pub quantity: i32,
    pub selected_seats: Vec<String>,
    pub total_amount: f64,
}

/// Validate a booking request against the event and the currently booked
/// seats, and compute its total.
///
/// Seat-plan events require a non-empty seat selection and reject the whole
/// request if any seat is taken; no partial booking. Counter events clamp
/// the requested quantity to the remaining tickets instead of rejecting
/// (kept from the original product behavior; flagged as an asymmetry) —
/// except when no tickets remain at all, which is a hard rejection:
/// a booking always holds at least one ticket.
pub fn validate_booking(
    event: &BookableEvent,
    booked: &HashSet<String>,
    request: &BookingRequest,
) -> Result<PricedBooking, BookingError> {
    if !event.is_active {
        return Err(BookingError::EventNotBookable(event.id));
    }

    match &event.seat_plan {
        Some(plan) => {
            if request.selected_seats.is_empty() {
                return Err(BookingError::SeatSelectionRequired);
            }
            if request.selected_seats.iter().any(|id| booked.contains(id)) {
                return Err(BookingError::SeatUnavailable);
            }

            let total_amount = request
                .selected_seats
                .iter()
                .map(|id| seat_price(plan, id, event.price))
                .sum();

            Ok(PricedBooking {
                quantity: request.selected_seats.len() as i32,
                selected_seats: request.selected_seats.clone(),
                total_amount,
            })
        }
        None => {
            let quantity = request.quantity.min(event.available_tickets);
            if quantity < 1 {
                return Err(BookingError::SoldOut);
            }
            Ok(PricedBooking {
                quantity,
                selected_seats: Vec::new(),
                total_amount: event.price * quantity as f64,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat_plan::{Seat, Section};

    fn sectioned_event() -> BookableEvent {
        BookableEvent {
            id: Uuid::now_v7(),
            price: 99.0,
            is_active: true,
            seat_plan: Some(SeatPlan::Sectioned {
                sections: vec![
                    Section {
                        id: "A".into(),
                        name: None,
                        capacity: 2,
                        price: 50.0,
                    },
                    Section {
                        id: "B".into(),
                        name: None,
                        capacity: 1,
                        price: 30.0,
                    },
                ],
            }),
            available_tickets: 0,
        }
    }

    fn counter_event(price: f64, tickets: i32) -> BookableEvent {
        BookableEvent {
            id: Uuid::now_v7(),
            price,
            is_active: true,
            seat_plan: None,
            available_tickets: tickets,
        }
    }

    fn seats(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prices_seats_by_section_prefix() {
        let event = sectioned_event();
        let priced = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 1,
                selected_seats: seats(&["A-2", "B-1"]),
            },
        )
        .unwrap();

        assert_eq!(priced.total_amount, 80.0);
        // Effective quantity follows the seat list, not the requested count
        assert_eq!(priced.quantity, 2);
    }

    #[test]
    fn test_itemized_unknown_seat_falls_back_to_base_price() {
        let event = BookableEvent {
            id: Uuid::now_v7(),
            price: 99.0,
            is_active: true,
            seat_plan: Some(SeatPlan::Itemized {
                seats: vec![Seat {
                    id: "1".into(),
                    label: None,
                    price: 20.0,
                }],
            }),
            available_tickets: 0,
        };
        let priced = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 1,
                selected_seats: seats(&["x"]),
            },
        )
        .unwrap();

        assert_eq!(priced.total_amount, 99.0);
    }

    #[test]
    fn test_seat_plan_requires_selection() {
        let event = sectioned_event();
        let err = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 2,
                selected_seats: vec![],
            },
        )
        .unwrap_err();

        assert!(matches!(err, BookingError::SeatSelectionRequired));
    }

    #[test]
    fn test_booked_seat_rejects_whole_request() {
        let event = sectioned_event();
        let booked: HashSet<String> = ["A-1".to_string()].into_iter().collect();
        let err = validate_booking(
            &event,
            &booked,
            &BookingRequest {
                quantity: 2,
                selected_seats: seats(&["A-1", "A-2"]),
            },
        )
        .unwrap_err();

        assert!(matches!(err, BookingError::SeatUnavailable));
    }

    #[test]
    fn test_sequential_double_booking_rejected() {
        let event = sectioned_event();
        let request = BookingRequest {
            quantity: 1,
            selected_seats: seats(&["A-1"]),
        };

        let mut booked = HashSet::new();
        let first = validate_booking(&event, &booked, &request).unwrap();
        booked.extend(first.selected_seats.iter().cloned());

        let second = validate_booking(&event, &booked, &request).unwrap_err();
        assert!(matches!(second, BookingError::SeatUnavailable));
    }

    #[test]
    fn test_counter_event_clamps_quantity() {
        let event = counter_event(10.0, 3);
        let priced = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 10,
                selected_seats: vec![],
            },
        )
        .unwrap();

        assert_eq!(priced.quantity, 3);
        assert_eq!(priced.total_amount, 30.0);
        assert!(priced.selected_seats.is_empty());
    }

    #[test]
    fn test_counter_event_within_limit() {
        let event = counter_event(10.0, 5);
        let priced = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 2,
                selected_seats: vec![],
            },
        )
        .unwrap();

        assert_eq!(priced.quantity, 2);
        assert_eq!(priced.total_amount, 20.0);
    }

    #[test]
    fn test_sold_out_counter_event_rejected() {
        let event = counter_event(10.0, 0);
        let err = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 5,
                selected_seats: vec![],
            },
        )
        .unwrap_err();

        // Never a zero-quantity booking; the last ticket going away turns
        // the clamp into a rejection
        assert!(matches!(err, BookingError::SoldOut));
    }

    #[test]
    fn test_counter_event_clamps_to_last_ticket() {
        let event = counter_event(10.0, 1);
        let priced = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 5,
                selected_seats: vec![],
            },
        )
        .unwrap();

        assert_eq!(priced.quantity, 1);
        assert_eq!(priced.total_amount, 10.0);
    }

    #[test]
    fn test_inactive_event_not_bookable() {
        let mut event = sectioned_event();
        event.is_active = false;
        let err = validate_booking(
            &event,
            &HashSet::new(),
            &BookingRequest {
                quantity: 1,
                selected_seats: seats(&["A-1"]),
            },
        )
        .unwrap_err();

        assert!(matches!(err, BookingError::EventNotBookable(_)));
    }
}
