// Event read path: listings and single-event reads with computed
// availability. The snapshot is derived fresh on every call so it reflects
// the latest bookings and cancellations.

use std::collections::HashSet;

use anyhow::Result;
use seatline_contracts::{Event, EventStatus};
use seatline_core::{available_seats, seat_count};
use seatline_storage::{models::EventFilter, Database, EventRow};
use std::sync::Arc;
use uuid::Uuid;

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Public listing with optional route filters
    pub async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let rows = self.db.list_events(filter).await?;
        let booked_by_event = self.db.active_seat_ids_by_event().await?;

        let empty = HashSet::new();
        Ok(rows
            .into_iter()
            .map(|row| {
                let booked = booked_by_event.get(&row.id).unwrap_or(&empty);
                event_to_dto(row, booked)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Event>> {
        let Some(row) = self.db.get_event(id).await? else {
            return Ok(None);
        };
        let booked = self.db.active_seat_ids(id).await?;
        Ok(Some(event_to_dto(row, &booked)))
    }
}

/// Attach the availability snapshot to an event row.
///
/// `available_seats` stays `None` for counter-only events; their
/// availability is `available_tickets`.
pub(crate) fn event_to_dto(row: EventRow, booked: &HashSet<String>) -> Event {
    let plan = row.seat_plan.as_ref().map(|p| &p.0);
    let seats = plan.map(|p| available_seats(p, booked));
    let count = seat_count(plan, row.available_tickets);

    Event {
        id: row.id,
        title: row.title,
        description: row.description,
        category: row.category,
        date: row.date,
        location: row.location,
        source: row.source,
        destination: row.destination,
        image_url: row.image_url,
        price: row.price,
        available_tickets: row.available_tickets,
        seat_plan: row.seat_plan.map(|p| p.0),
        status: EventStatus::from(row.status.as_str()),
        created_at: row.created_at,
        available_seats: seats,
        seat_count: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use seatline_core::{SeatPlan, Section};
    use sqlx::types::Json;

    fn event_row(plan: Option<SeatPlan>, tickets: i32) -> EventRow {
        EventRow {
            id: Uuid::now_v7(),
            title: "Test".into(),
            description: String::new(),
            category: "event".into(),
            date: Utc::now(),
            location: String::new(),
            source: String::new(),
            destination: String::new(),
            image_url: None,
            price: 10.0,
            available_tickets: tickets,
            seat_plan: plan.map(Json),
            status: "active".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_counter_event_has_no_seat_list() {
        let dto = event_to_dto(event_row(None, 42), &HashSet::new());
        assert!(dto.available_seats.is_none());
        assert_eq!(dto.seat_count, 42);
    }

    #[test]
    fn test_sectioned_event_projects_availability() {
        let plan = SeatPlan::Sectioned {
            sections: vec![Section {
                id: "A".into(),
                name: None,
                capacity: 2,
                price: 50.0,
            }],
        };
        let booked: HashSet<String> = ["A-1".to_string()].into_iter().collect();
        let dto = event_to_dto(event_row(Some(plan), 0), &booked);

        let seats = dto.available_seats.unwrap();
        assert_eq!(seats.len(), 1);
        assert_eq!(seats[0].id, "A-2");
        assert_eq!(dto.seat_count, 2);
    }
}
