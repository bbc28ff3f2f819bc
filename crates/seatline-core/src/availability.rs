// Availability projection
//
// Pure functions from (seat plan, booked-seat set) to what is free right
// now. Recomputed on every read; the booked set must come from the current
// non-cancelled bookings of the event, never from a cache.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::seat_plan::SeatPlan;

/// A single free seat as shown to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SeatDescriptor {
    pub id: String,
    pub section: Option<String>,
    pub label: String,
    pub price: f64,
}

/// Enumerate the seats of `plan` that are not in `booked`.
///
/// Ordering is stable: sections in plan order with positions 1..=capacity,
/// itemized seats in plan order. Callers with no seat plan have no seat
/// list; their availability is the event's ticket counter.
pub fn available_seats(plan: &SeatPlan, booked: &HashSet<String>) -> Vec<SeatDescriptor> {
    let mut seats = Vec::new();
    match plan {
        SeatPlan::Sectioned { sections } => {
            for sec in sections {
                for n in 1..=sec.capacity {
                    let id = SeatPlan::section_seat_id(&sec.id, n);
                    if booked.contains(&id) {
                        continue;
                    }
                    seats.push(SeatDescriptor {
                        id,
                        section: Some(sec.id.clone()),
                        label: format!("{} #{}", sec.name.as_deref().unwrap_or(&sec.id), n),
                        price: sec.price,
                    });
                }
            }
        }
        SeatPlan::Itemized { seats: defined } => {
            for seat in defined {
                if booked.contains(&seat.id) {
                    continue;
                }
                seats.push(SeatDescriptor {
                    id: seat.id.clone(),
                    section: None,
                    label: seat.label.clone().unwrap_or_else(|| seat.id.clone()),
                    price: seat.price,
                });
            }
        }
    }
    seats
}

/// Total seat/ticket count for an event: sum of section capacities,
/// number of itemized seats, or the fallback ticket counter when the
/// event has no seat plan.
pub fn seat_count(plan: Option<&SeatPlan>, fallback: i32) -> i32 {
    match plan {
        Some(SeatPlan::Sectioned { sections }) => {
            sections.iter().map(|s| s.capacity as i32).sum()
        }
        Some(SeatPlan::Itemized { seats }) => seats.len() as i32,
        None => fallback,
    }
}

/// Resolve the price of one seat id against the plan.
///
/// Sectioned plans match by "{section_id}-" prefix, itemized plans by exact
/// id. An unresolvable id falls back to the event's base price; that is a
/// deliberate fallback, not an error.
pub fn seat_price(plan: &SeatPlan, seat_id: &str, base_price: f64) -> f64 {
    match plan {
        SeatPlan::Sectioned { sections } => sections
            .iter()
            .find(|sec| seat_id.starts_with(&format!("{}-", sec.id)))
            .map(|sec| sec.price)
            .unwrap_or(base_price),
        SeatPlan::Itemized { seats } => seats
            .iter()
            .find(|s| s.id == seat_id)
            .map(|s| s.price)
            .unwrap_or(base_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat_plan::{Seat, Section};

    fn two_section_plan() -> SeatPlan {
        SeatPlan::Sectioned {
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
        }
    }

    #[test]
    fn test_sectioned_enumeration_order_and_prices() {
        let plan = two_section_plan();
        let seats = available_seats(&plan, &HashSet::new());

        let ids: Vec<&str> = seats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A-1", "A-2", "B-1"]);
        let prices: Vec<f64> = seats.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![50.0, 50.0, 30.0]);
        assert_eq!(seats[0].section.as_deref(), Some("A"));
        assert_eq!(seats[0].label, "A #1");
    }

    #[test]
    fn test_section_name_used_in_label() {
        let plan = SeatPlan::Sectioned {
            sections: vec![Section {
                id: "A".into(),
                name: Some("Stand A".into()),
                capacity: 1,
                price: 50.0,
            }],
        };
        let seats = available_seats(&plan, &HashSet::new());
        assert_eq!(seats[0].label, "Stand A #1");
    }

    #[test]
    fn test_booked_seat_excluded() {
        let plan = two_section_plan();
        let booked: HashSet<String> = ["A-1".to_string()].into_iter().collect();
        let seats = available_seats(&plan, &booked);

        let ids: Vec<&str> = seats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A-2", "B-1"]);
    }

    #[test]
    fn test_itemized_enumeration() {
        let plan = SeatPlan::Itemized {
            seats: vec![
                Seat {
                    id: "1".into(),
                    label: Some("Front".into()),
                    price: 20.0,
                },
                Seat {
                    id: "2".into(),
                    label: None,
                    price: 15.0,
                },
            ],
        };
        let booked: HashSet<String> = ["2".to_string()].into_iter().collect();
        let seats = available_seats(&plan, &booked);

        assert_eq!(seats.len(), 1);
        assert_eq!(seats[0].id, "1");
        assert_eq!(seats[0].label, "Front");
        assert_eq!(seats[0].section, None);
    }

    #[test]
    fn test_stable_ordering_on_repeated_calls() {
        let plan = two_section_plan();
        let first = available_seats(&plan, &HashSet::new());
        let second = available_seats(&plan, &HashSet::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_seat_count() {
        assert_eq!(seat_count(Some(&two_section_plan()), 99), 3);

        let itemized = SeatPlan::Itemized {
            seats: vec![Seat {
                id: "1".into(),
                label: None,
                price: 20.0,
            }],
        };
        assert_eq!(seat_count(Some(&itemized), 99), 1);
        assert_eq!(seat_count(None, 42), 42);
    }

    #[test]
    fn test_seat_price_prefix_match() {
        let plan = two_section_plan();
        assert_eq!(seat_price(&plan, "A-2", 99.0), 50.0);
        assert_eq!(seat_price(&plan, "B-1", 99.0), 30.0);
        // Unknown section falls back to base price
        assert_eq!(seat_price(&plan, "C-1", 99.0), 99.0);
    }

    #[test]
    fn test_seat_price_itemized_fallback() {
        let plan = SeatPlan::Itemized {
            seats: vec![Seat {
                id: "1".into(),
                label: None,
                price: 20.0,
            }],
        };
        assert_eq!(seat_price(&plan, "1", 99.0), 20.0);
        assert_eq!(seat_price(&plan, "x", 99.0), 99.0);
    }
}
