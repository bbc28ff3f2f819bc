// Repository layer for database operations
//
// Booking creation and lifecycle live in booking_store.rs; this module
// covers users, events, availability reads and stats.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUser) -> Result<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, role, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_users(&self) -> Result<Vec<UserRow>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: CreateEvent) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, title, description, category, date, location,
                                source, destination, image_url, price,
                                available_tickets, seat_plan, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, title, description, category, date, location, source,
                      destination, image_url, price, available_tickets,
                      seat_plan, status, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(input.date)
        .bind(&input.location)
        .bind(&input.source)
        .bind(&input.destination)
        .bind(&input.image_url)
        .bind(input.price)
        .bind(input.available_tickets)
        .bind(input.seat_plan.map(Json))
        .bind(&input.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, category, date, location, source,
                   destination, image_url, price, available_tickets,
                   seat_plan, status, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Public listing: all events matching the optional route filters,
    /// soonest first
    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, category, date, location, source,
                   destination, image_url, price, available_tickets,
                   seat_plan, status, created_at
            FROM events
            WHERE ($1::text IS NULL OR source ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR destination ILIKE '%' || $2 || '%')
              AND ($3::date IS NULL OR date::date = $3)
            ORDER BY date ASC
            "#,
        )
        .bind(&filter.source)
        .bind(&filter.destination)
        .bind(filter.date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Admin listing: every event regardless of status, newest first
    pub async fn list_all_events(&self) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, category, date, location, source,
                   destination, image_url, price, available_tickets,
                   seat_plan, status, created_at
            FROM events
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_event(&self, id: Uuid, input: UpdateEvent) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                date = COALESCE($5, date),
                location = COALESCE($6, location),
                source = COALESCE($7, source),
                destination = COALESCE($8, destination),
                image_url = COALESCE($9, image_url),
                price = COALESCE($10, price),
                available_tickets = COALESCE($11, available_tickets),
                seat_plan = COALESCE($12, seat_plan),
                status = COALESCE($13, status)
            WHERE id = $1
            RETURNING id, title, description, category, date, location, source,
                      destination, image_url, price, available_tickets,
                      seat_plan, status, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(input.date)
        .bind(&input.location)
        .bind(&input.source)
        .bind(&input.destination)
        .bind(&input.image_url)
        .bind(input.price)
        .bind(input.available_tickets)
        .bind(input.seat_plan.map(Json))
        .bind(&input.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_event_status(&self, id: Uuid, status: &str) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET status = $2
            WHERE id = $1
            RETURNING id, title, description, category, date, location, source,
                      destination, image_url, price, available_tickets,
                      seat_plan, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Availability reads
    // ============================================

    /// Union of selected seats over the event's non-cancelled bookings.
    /// Always read fresh; availability is never cached.
    pub async fn active_seat_ids(&self, event_id: Uuid) -> Result<HashSet<String>> {
        let rows: Vec<Json<Vec<String>>> = sqlx::query_scalar(
            r#"
            SELECT selected_seats
            FROM bookings
            WHERE event_id = $1 AND is_cancelled = FALSE
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().flat_map(|seats| seats.0).collect())
    }

    /// Booked-seat unions for all events at once, for list endpoints
    pub async fn active_seat_ids_by_event(&self) -> Result<HashMap<Uuid, HashSet<String>>> {
        let rows: Vec<(Uuid, Json<Vec<String>>)> = sqlx::query_as(
            r#"
            SELECT event_id, selected_seats
            FROM bookings
            WHERE is_cancelled = FALSE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_event: HashMap<Uuid, HashSet<String>> = HashMap::new();
        for (event_id, seats) in rows {
            by_event.entry(event_id).or_default().extend(seats.0);
        }
        Ok(by_event)
    }

    // ============================================
    // Stats
    // ============================================

    pub async fn stats(&self) -> Result<StatsRow> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM events) AS total_events,
                COUNT(*) AS total_bookings,
                COUNT(*) FILTER (WHERE payment_status = 'SUCCESS' AND NOT is_cancelled) AS payment_success,
                COUNT(*) FILTER (WHERE payment_status = 'PENDING' AND NOT is_cancelled) AS payment_pending,
                COUNT(*) FILTER (WHERE is_cancelled) AS cancelled_bookings,
                COALESCE(SUM(total_amount) FILTER (WHERE payment_status = 'SUCCESS' AND NOT is_cancelled), 0) AS total_revenue
            FROM bookings
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
