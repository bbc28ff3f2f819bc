// Admin routes: event management, user/booking listings, stats

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use seatline_contracts::{
    AdminBooking, CreateEventRequest, Event, ListResponse, StatsResponse, UpdateEventRequest, User,
};
use seatline_storage::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AdminUser, AuthState, FromRef};
use crate::error::ApiError;
use crate::services::AdminService;

/// App state for admin routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AdminService>,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: AuthState) -> Self {
        Self {
            service: Arc::new(AdminService::new(db)),
            auth,
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(input: &AppState) -> Self {
        input.auth.clone()
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/admin/events", post(create_event).get(list_events))
        .route(
            "/v1/admin/events/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/v1/admin/events/:event_id/cancel", post(cancel_event))
        .route("/v1/admin/users", get(list_users))
        .route("/v1/admin/bookings", get(list_bookings))
        .route("/v1/admin/stats", get(stats))
        .with_state(state)
}

/// GET /v1/admin/events - All events (any status) with availability
#[utoipa::path(
    get,
    path = "/v1/admin/events",
    responses(
        (status = 200, description = "List of events", body = ListResponse<Event>),
        (status = 403, description = "Admin required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn list_events(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let events = state.service.list_events().await?;
    Ok(Json(ListResponse::new(events)))
}

/// POST /v1/admin/events - Create an event
#[utoipa::path(
    post,
    path = "/v1/admin/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid seat plan"),
        (status = 403, description = "Admin required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn create_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.service.create_event(req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /v1/admin/events/{event_id} - One event with availability
#[utoipa::path(
    get,
    path = "/v1/admin/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 403, description = "Admin required"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn get_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .get_event(event_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(Json(event))
}

/// PUT /v1/admin/events/{event_id} - Partial update of an event
#[utoipa::path(
    put,
    path = "/v1/admin/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Invalid seat plan"),
        (status = 403, description = "Admin required"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn update_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .update_event(event_id, req)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(Json(event))
}

/// DELETE /v1/admin/events/{event_id} - Remove an event
#[utoipa::path(
    delete,
    path = "/v1/admin/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Admin required"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete_event(event_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Not found"))
    }
}

/// POST /v1/admin/events/{event_id}/cancel - Mark an event cancelled
#[utoipa::path(
    post,
    path = "/v1/admin/events/{event_id}/cancel",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event cancelled", body = Event),
        (status = 403, description = "Admin required"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn cancel_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .cancel_event(event_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    Ok(Json(event))
}

/// GET /v1/admin/users - List user accounts
#[utoipa::path(
    get,
    path = "/v1/admin/users",
    responses(
        (status = 200, description = "List of users", body = ListResponse<User>),
        (status = 403, description = "Admin required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ListResponse<User>>, ApiError> {
    let users = state.service.list_users().await?;
    Ok(Json(ListResponse::new(users)))
}

/// GET /v1/admin/bookings - Every booking with user and event fields
#[utoipa::path(
    get,
    path = "/v1/admin/bookings",
    responses(
        (status = 200, description = "List of bookings", body = ListResponse<AdminBooking>),
        (status = 403, description = "Admin required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ListResponse<AdminBooking>>, ApiError> {
    let bookings = state.service.list_bookings().await?;
    Ok(Json(ListResponse::new(bookings)))
}

/// GET /v1/admin/stats - Summary statistics
#[utoipa::path(
    get,
    path = "/v1/admin/stats",
    responses(
        (status = 200, description = "Summary statistics", body = StatsResponse),
        (status = 403, description = "Admin required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "admin"
)]
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.service.stats().await?;
    Ok(Json(stats))
}
