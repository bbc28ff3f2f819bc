// Public event routes: listings and single-event reads with availability

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use seatline_contracts::{Event, ListResponse};
use seatline_storage::{models::EventFilter, Database};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", get(list_events))
        .route("/v1/events/:event_id", get(get_event))
        .with_state(state)
}

/// Optional filters for route-style events (bus/train)
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EventQuery {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

/// GET /v1/events - List events with computed availability
#[utoipa::path(
    get,
    path = "/v1/events",
    params(EventQuery),
    responses(
        (status = 200, description = "List of events", body = ListResponse<Event>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let filter = EventFilter {
        source: query.source,
        destination: query.destination,
        date: query.date,
    };
    let events = state.service.list(&filter).await?;
    Ok(Json(ListResponse::new(events)))
}

/// GET /v1/events/{event_id} - One event with computed availability
#[utoipa::path(
    get,
    path = "/v1/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .get(event_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    Ok(Json(event))
}
