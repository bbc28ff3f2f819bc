// Booking persistence, including the race-safe creation path
//
// Creation and cancellation both take a FOR UPDATE lock on the event row,
// so the check-then-insert sequence serializes per event: two requests
// racing for the same seat queue on the lock and the loser sees the
// winner's seats in the booked set. Bookings for different events never
// contend.

use anyhow::Result;
use seatline_core::{validate_booking, BookingError, BookingRequest};
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::*;
use crate::repositories::Database;

fn db_err(e: sqlx::Error) -> BookingError {
    BookingError::Internal(e.into())
}

impl Database {
    /// Validate, price and insert a booking in one per-event transaction.
    ///
    /// All-or-nothing: any validation failure rolls the transaction back
    /// and nothing is written.
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        request: &BookingRequest,
    ) -> Result<BookingRow, BookingError> {
        let mut tx = self.pool().begin().await.map_err(db_err)?;

        // Per-event serialization point
        let event = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, category, date, location, source,
                   destination, image_url, price, available_tickets,
                   seat_plan, status, created_at
            FROM events
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err)?
        .ok_or(BookingError::EventNotFound(event_id))?;

        // Read the booked set under the same lock that guards the insert
        let booked_rows: Vec<Json<Vec<String>>> = sqlx::query_scalar(
            r#"
            SELECT selected_seats
            FROM bookings
            WHERE event_id = $1 AND is_cancelled = FALSE
            "#,
        )
        .bind(event_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(db_err)?;
        let booked = booked_rows.into_iter().flat_map(|seats| seats.0).collect();

        let priced = validate_booking(&event.to_bookable(), &booked, request)?;

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (id, user_id, event_id, quantity, selected_seats,
                                  total_amount, payment_status)
            VALUES ($1, $2, $3, $4, $5, $6, 'PENDING')
            RETURNING id, user_id, event_id, quantity, selected_seats,
                      total_amount, payment_status, is_cancelled, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(user_id)
        .bind(event_id)
        .bind(priced.quantity)
        .bind(Json(&priced.selected_seats))
        .bind(priced.total_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;

        tracing::info!(
            booking_id = %row.id,
            event_id = %event_id,
            quantity = row.quantity,
            "Booking created"
        );

        Ok(row)
    }

    /// Cancel a booking owned by `user_id`, releasing its seats.
    ///
    /// Takes the same event lock as creation so a cancel racing with a
    /// booking for the freed seats serializes cleanly. Cancelling an
    /// already-cancelled booking succeeds silently.
    pub async fn cancel_booking(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<BookingWithEventRow, BookingError> {
        let mut tx = self.pool().begin().await.map_err(db_err)?;

        let booking = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, event_id, quantity, selected_seats,
                   total_amount, payment_status, is_cancelled, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err)?
        .ok_or(BookingError::BookingNotFound(booking_id))?;

        if booking.user_id != user_id {
            return Err(BookingError::Forbidden);
        }

        sqlx::query("SELECT id FROM events WHERE id = $1 FOR UPDATE")
            .bind(booking.event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_err)?;

        let row = sqlx::query_as::<_, BookingWithEventRow>(
            r#"
            UPDATE bookings b
            SET is_cancelled = TRUE
            FROM events e
            WHERE b.id = $1 AND e.id = b.event_id
            RETURNING b.id, b.user_id, b.event_id, b.quantity, b.selected_seats,
                      b.total_amount, b.payment_status, b.is_cancelled, b.created_at,
                      e.title AS event_title, e.date AS event_date,
                      e.price AS event_price, e.category AS event_category
            "#,
        )
        .bind(booking_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;

        tracing::info!(booking_id = %booking_id, "Booking cancelled");

        Ok(row)
    }

    /// Flip the simulated payment to SUCCESS.
    ///
    /// Unconditional and idempotent: completing twice leaves SUCCESS both
    /// times with no error.
    pub async fn complete_payment(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<BookingRow, BookingError> {
        let booking = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, event_id, quantity, selected_seats,
                   total_amount, payment_status, is_cancelled, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.pool())
        .await
        .map_err(db_err)?
        .ok_or(BookingError::BookingNotFound(booking_id))?;

        if booking.user_id != user_id {
            return Err(BookingError::Forbidden);
        }

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            UPDATE bookings
            SET payment_status = 'SUCCESS'
            WHERE id = $1
            RETURNING id, user_id, event_id, quantity, selected_seats,
                      total_amount, payment_status, is_cancelled, created_at
            "#,
        )
        .bind(booking_id)
        .fetch_one(self.pool())
        .await
        .map_err(db_err)?;

        tracing::info!(booking_id = %booking_id, "Payment completed");

        Ok(row)
    }

    pub async fn get_booking(&self, id: Uuid) -> Result<Option<BookingRow>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, event_id, quantity, selected_seats,
                   total_amount, payment_status, is_cancelled, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row)
    }

    /// Current user's bookings with event display fields, newest first
    pub async fn list_bookings_for_user(&self, user_id: Uuid) -> Result<Vec<BookingWithEventRow>> {
        let rows = sqlx::query_as::<_, BookingWithEventRow>(
            r#"
            SELECT b.id, b.user_id, b.event_id, b.quantity, b.selected_seats,
                   b.total_amount, b.payment_status, b.is_cancelled, b.created_at,
                   e.title AS event_title, e.date AS event_date,
                   e.price AS event_price, e.category AS event_category
            FROM bookings b
            JOIN events e ON b.event_id = e.id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Admin listing: every booking joined with user and event fields
    pub async fn list_all_bookings(&self) -> Result<Vec<AdminBookingRow>> {
        let rows = sqlx::query_as::<_, AdminBookingRow>(
            r#"
            SELECT b.id, b.user_id, b.event_id, b.quantity, b.selected_seats,
                   b.total_amount, b.payment_status, b.is_cancelled, b.created_at,
                   u.username AS user_username, u.email AS user_email,
                   e.title AS event_title, e.date AS event_date,
                   e.price AS event_price, e.category AS event_category
            FROM bookings b
            JOIN users u ON b.user_id = u.id
            JOIN events e ON b.event_id = e.id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }
}
