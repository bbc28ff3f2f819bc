// Registration and login endpoints

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use seatline_contracts::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
use seatline_storage::{models::CreateUser, password};

use super::middleware::AuthState;
use crate::error::ApiError;

pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/login", post(login))
        .with_state(state)
}

/// POST /v1/auth/register - Create an account and return an access token
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or duplicate username/email"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AuthState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if req.username.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request(
            "username, email and password required",
        ));
    }

    if state.db.get_user_by_username(&req.username).await?.is_some() {
        return Err(ApiError::bad_request("This username is already taken."));
    }
    if state.db.get_user_by_email(&req.email).await?.is_some() {
        return Err(ApiError::bad_request("This email is already registered."));
    }

    let password_hash = password::hash_password(&req.password)?;
    let row = state
        .db
        .create_user(CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
            role: "user".to_string(),
        })
        .await?;

    tracing::info!(user_id = %row.id, "User registered");

    let access = state
        .jwt_service
        .generate_access_token(row.id, &row.username, &row.role)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access,
            user: User {
                id: row.id,
                username: row.username,
                email: row.email,
                role: Role::from(row.role.as_str()),
            },
        }),
    ))
}

/// POST /v1/auth/login - Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("username and password required"));
    }

    let row = state
        .db
        .get_user_by_username(&req.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !password::verify_password(&req.password, &row.password_hash)? {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let access = state
        .jwt_service
        .generate_access_token(row.id, &row.username, &row.role)?;

    Ok(Json(AuthResponse {
        access,
        user: User {
            id: row.id,
            username: row.username,
            email: row.email,
            role: Role::from(row.role.as_str()),
        },
    }))
}
