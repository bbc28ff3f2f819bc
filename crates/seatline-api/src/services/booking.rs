// Booking service: create, list, cancel, complete payment
//
// Creation delegates to the storage layer's per-event transaction; this
// service only validates request shape and maps rows to DTOs.

use seatline_contracts::{
    AdminBooking, Booking, CreateBookingRequest, CreateBookingResponse, PaymentResponse,
    PaymentStatus,
};
use seatline_core::BookingRequest;
use seatline_storage::{
    models::{AdminBookingRow, BookingWithEventRow},
    Database,
};
use std::sync::Arc;
use uuid::Uuid;

use super::format_amount;
use crate::error::ApiError;

pub struct BookingService {
    db: Arc<Database>,
}

impl BookingService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        req: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, ApiError> {
        if req.quantity < 1 {
            return Err(ApiError::bad_request("event_id and quantity required"));
        }

        let request = BookingRequest {
            quantity: req.quantity,
            selected_seats: req.selected_seats,
        };
        let row = self.db.create_booking(user_id, req.event_id, &request).await?;

        Ok(CreateBookingResponse { id: row.id })
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, ApiError> {
        let rows = self.db.list_bookings_for_user(user_id).await?;
        Ok(rows.into_iter().map(booking_to_dto).collect())
    }

    pub async fn cancel(&self, booking_id: Uuid, user_id: Uuid) -> Result<Booking, ApiError> {
        let row = self.db.cancel_booking(booking_id, user_id).await?;
        Ok(booking_to_dto(row))
    }

    pub async fn complete_payment(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<PaymentResponse, ApiError> {
        let row = self.db.complete_payment(booking_id, user_id).await?;
        Ok(PaymentResponse {
            id: row.id,
            payment_status: PaymentStatus::from(row.payment_status.as_str()),
        })
    }
}

pub(crate) fn booking_to_dto(row: BookingWithEventRow) -> Booking {
    Booking {
        id: row.id,
        event: row.event_id,
        user: row.user_id,
        event_title: row.event_title,
        event_date: row.event_date,
        event_price: format_amount(row.event_price),
        event_category: row.event_category,
        quantity: row.quantity,
        selected_seats: row.selected_seats.0,
        total_amount: format_amount(row.total_amount),
        payment_status: PaymentStatus::from(row.payment_status.as_str()),
        is_cancelled: row.is_cancelled,
        created_at: row.created_at,
    }
}

pub(crate) fn admin_booking_to_dto(row: AdminBookingRow) -> AdminBooking {
    AdminBooking {
        id: row.id,
        user: row.user_id,
        user_username: row.user_username,
        user_email: row.user_email,
        event: row.event_id,
        event_title: row.event_title,
        event_date: row.event_date,
        event_price: format_amount(row.event_price),
        event_category: row.event_category,
        quantity: row.quantity,
        selected_seats: row.selected_seats.0,
        total_amount: format_amount(row.total_amount),
        payment_status: PaymentStatus::from(row.payment_status.as_str()),
        is_cancelled: row.is_cancelled,
        created_at: row.created_at,
    }
}
