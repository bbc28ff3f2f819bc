// Booking routes: create, list mine, cancel, complete payment

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use seatline_contracts::{
    Booking, CreateBookingRequest, CreateBookingResponse, ListResponse, PaymentResponse,
};
use seatline_storage::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AuthState, AuthUser, FromRef};
use crate::error::ApiError;
use crate::services::BookingService;

/// App state for booking routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BookingService>,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: AuthState) -> Self {
        Self {
            service: Arc::new(BookingService::new(db)),
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
        .route("/v1/bookings", post(create_booking).get(list_my_bookings))
        .route("/v1/bookings/:booking_id/cancel", post(cancel_booking))
        .route(
            "/v1/bookings/:booking_id/complete-payment",
            post(complete_payment),
        )
        .with_state(state)
}

/// POST /v1/bookings - Create a booking for the authenticated user
#[utoipa::path(
    post,
    path = "/v1/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Seat selection missing or seats unavailable"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Event not found or inactive"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), ApiError> {
    let created = state.service.create(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /v1/bookings - List the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/v1/bookings",
    responses(
        (status = 200, description = "List of bookings", body = ListResponse<Booking>),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookings"
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ListResponse<Booking>>, ApiError> {
    let bookings = state.service.list_for_user(user.id).await?;
    Ok(Json(ListResponse::new(bookings)))
}

/// POST /v1/bookings/{booking_id}/cancel - Cancel an owned booking
#[utoipa::path(
    post,
    path = "/v1/bookings/{booking_id}/cancel",
    params(
        ("booking_id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = Booking),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the booking owner"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookings"
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.service.cancel(booking_id, user.id).await?;
    Ok(Json(booking))
}

/// POST /v1/bookings/{booking_id}/complete-payment - Simulated payment
#[utoipa::path(
    post,
    path = "/v1/bookings/{booking_id}/complete-payment",
    params(
        ("booking_id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Payment completed", body = PaymentResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the booking owner"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "bookings"
)]
pub async fn complete_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let payment = state.service.complete_payment(booking_id, user.id).await?;
    Ok(Json(payment))
}
