// Seatline API server
// Decision: thin REST layer over Postgres; all availability is computed
// per-request from live bookings, never cached

mod admin;
mod auth;
mod bookings;
mod error;
mod events;
mod services;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use seatline_contracts::*;
use seatline_storage::Database;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::routes::register,
        auth::routes::login,
        events::list_events,
        events::get_event,
        bookings::create_booking,
        bookings::list_my_bookings,
        bookings::cancel_booking,
        bookings::complete_payment,
        admin::list_events,
        admin::create_event,
        admin::get_event,
        admin::update_event,
        admin::delete_event,
        admin::cancel_event,
        admin::list_users,
        admin::list_bookings,
        admin::stats,
    ),
    components(
        schemas(
            Event, EventStatus, CreateEventRequest, UpdateEventRequest,
            SeatPlan, Section, Seat, SeatDescriptor,
            Booking, AdminBooking, PaymentStatus,
            CreateBookingRequest, CreateBookingResponse, PaymentResponse,
            User, Role,
            RegisterRequest, LoginRequest, AuthResponse,
            StatsResponse, ErrorResponse,
            ListResponse<Event>,
            ListResponse<Booking>,
            ListResponse<AdminBooking>,
            ListResponse<User>,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "events", description = "Public event listings with availability"),
        (name = "bookings", description = "Booking lifecycle endpoints"),
        (name = "admin", description = "Event management, listings and stats")
    ),
    info(
        title = "Seatline API",
        version = "0.2.0",
        description = "Ticket/seat booking API: events, availability, bookings and simulated payment",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatline_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("seatline-api starting...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;
    tracing::info!("Connected to database");

    let db = Arc::new(db);

    // Load authentication configuration
    let auth_config = auth::AuthConfig::from_env();
    let auth_state = auth::AuthState::new(auth_config, db.clone());

    // Create module-specific states
    let events_state = events::AppState::new(db.clone());
    let bookings_state = bookings::AppState::new(db.clone(), auth_state.clone());
    let admin_state = admin::AppState::new(db.clone(), auth_state.clone());

    // Load API prefix from environment (default: empty)
    // Example: API_PREFIX="/api" results in routes like /api/v1/events
    let api_prefix = std::env::var("API_PREFIX").unwrap_or_default();
    if !api_prefix.is_empty() {
        tracing::info!(prefix = %api_prefix, "API prefix configured");
    }

    // Load CORS allowed origins from environment (optional)
    // Only needed when the UI is served from a different origin than the API
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
    }

    // Build API routes
    let api_routes = Router::new()
        .merge(auth::routes(auth_state))
        .merge(events::routes(events_state))
        .merge(bookings::routes(bookings_state))
        .merge(admin::routes(admin_state));

    let mut app = Router::new().route("/health", get(health));

    // Apply API prefix if configured
    app = app.merge(build_router_with_prefix(api_routes, &api_prefix));

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let app = if !cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::ORIGIN,
                ])
                .allow_credentials(true),
        )
    } else {
        app
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Build router with optional API prefix (extracted for testing)
fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
