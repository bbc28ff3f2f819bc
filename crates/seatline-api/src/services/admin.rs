// Admin service: event management, user/booking listings, stats
//
// Seat-plan id uniqueness is enforced here, at event create/update time,
// so the booking path can assume ids never collide.

use std::collections::HashSet;

use seatline_contracts::{
    AdminBooking, CreateEventRequest, Event, EventStatus, Role, StatsResponse,
    UpdateEventRequest, User,
};
use seatline_core::SeatPlan;
use seatline_storage::{
    models::{CreateEvent, UpdateEvent},
    Database,
};
use std::sync::Arc;
use uuid::Uuid;

use super::booking::admin_booking_to_dto;
use super::event::event_to_dto;
use super::format_amount;
use crate::error::ApiError;

pub struct AdminService {
    db: Arc<Database>,
}

impl AdminService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every event regardless of status, with availability
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let rows = self.db.list_all_events().await?;
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

    pub async fn create_event(&self, req: CreateEventRequest) -> Result<Event, ApiError> {
        validate_seat_plan(req.seat_plan.as_ref())?;

        let row = self
            .db
            .create_event(CreateEvent {
                title: req.title,
                description: req.description,
                category: req.category,
                date: req.date,
                location: req.location,
                source: req.source,
                destination: req.destination,
                image_url: req.image_url,
                price: req.price,
                available_tickets: req.available_tickets,
                seat_plan: req.seat_plan,
                status: req.status.unwrap_or(EventStatus::Active).to_string(),
            })
            .await?;

        tracing::info!(event_id = %row.id, "Event created");

        Ok(event_to_dto(row, &HashSet::new()))
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<Event>, ApiError> {
        let Some(row) = self.db.get_event(id).await? else {
            return Ok(None);
        };
        let booked = self.db.active_seat_ids(id).await?;
        Ok(Some(event_to_dto(row, &booked)))
    }

    pub async fn update_event(
        &self,
        id: Uuid,
        req: UpdateEventRequest,
    ) -> Result<Option<Event>, ApiError> {
        validate_seat_plan(req.seat_plan.as_ref())?;

        let input = UpdateEvent {
            title: req.title,
            description: req.description,
            category: req.category,
            date: req.date,
            location: req.location,
            source: req.source,
            destination: req.destination,
            image_url: req.image_url,
            price: req.price,
            available_tickets: req.available_tickets,
            seat_plan: req.seat_plan,
            status: req.status.map(|s| s.to_string()),
        };
        let Some(row) = self.db.update_event(id, input).await? else {
            return Ok(None);
        };
        let booked = self.db.active_seat_ids(id).await?;
        Ok(Some(event_to_dto(row, &booked)))
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(self.db.delete_event(id).await?)
    }

    /// Flip an event to cancelled; existing bookings stay untouched
    pub async fn cancel_event(&self, id: Uuid) -> Result<Option<Event>, ApiError> {
        let Some(row) = self.db.set_event_status(id, "cancelled").await? else {
            return Ok(None);
        };
        tracing::info!(event_id = %id, "Event cancelled");
        let booked = self.db.active_seat_ids(id).await?;
        Ok(Some(event_to_dto(row, &booked)))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let rows = self.db.list_users().await?;
        Ok(rows
            .into_iter()
            .map(|row| User {
                id: row.id,
                username: row.username,
                email: row.email,
                role: Role::from(row.role.as_str()),
            })
            .collect())
    }

    pub async fn list_bookings(&self) -> Result<Vec<AdminBooking>, ApiError> {
        let rows = self.db.list_all_bookings().await?;
        Ok(rows.into_iter().map(admin_booking_to_dto).collect())
    }

    pub async fn stats(&self) -> Result<StatsResponse, ApiError> {
        let row = self.db.stats().await?;
        Ok(StatsResponse {
            total_users: row.total_users,
            total_events: row.total_events,
            total_bookings: row.total_bookings,
            payment_success: row.payment_success,
            payment_pending: row.payment_pending,
            cancelled_bookings: row.cancelled_bookings,
            total_revenue: format_amount(row.total_revenue),
        })
    }
}

fn validate_seat_plan(plan: Option<&SeatPlan>) -> Result<(), ApiError> {
    if let Some(dup) = plan.and_then(|p| p.duplicate_id()) {
        return Err(ApiError::bad_request(format!(
            "Duplicate seat plan id: {}",
            dup
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatline_core::Section;

    #[test]
    fn test_duplicate_section_id_rejected() {
        let plan = SeatPlan::Sectioned {
            sections: vec![
                Section {
                    id: "A".into(),
                    name: None,
                    capacity: 1,
                    price: 1.0,
                },
                Section {
                    id: "A".into(),
                    name: None,
                    capacity: 2,
                    price: 2.0,
                },
            ],
        };
        let err = validate_seat_plan(Some(&plan)).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_absent_plan_is_valid() {
        assert!(validate_seat_plan(None).is_ok());
    }
}
