// Authentication extractors
// Decision: Bearer token in the Authorization header; the user row is
// re-fetched on every request so deleted accounts lose access immediately

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use seatline_contracts::Role;
use std::sync::Arc;
use uuid::Uuid;

use super::{config::AuthConfig, jwt::JwtService};
use crate::error::ApiError;
use seatline_storage::Database;

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub jwt_service: Arc<JwtService>,
    pub db: Arc<Database>,
}

impl AuthState {
    pub fn new(config: AuthConfig, db: Arc<Database>) -> Self {
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
        Self {
            config,
            jwt_service,
            db,
        }
    }
}

/// Authenticated user context extracted from the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authenticated admin; rejects non-admin callers with 403
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

/// Helper trait for extracting AuthState from application state
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

impl FromRef<AuthState> for AuthState {
    fn from_ref(input: &AuthState) -> Self {
        input.clone()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        extract_auth_user(parts, &auth_state).await
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(ApiError::forbidden("Admin required"));
        }
        Ok(AdminUser(user))
    }
}

async fn extract_auth_user(parts: &mut Parts, auth_state: &AuthState) -> Result<AuthUser, ApiError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let claims = auth_state
        .jwt_service
        .validate_access_token(token)
        .map_err(|_| ApiError::unauthorized("Invalid token"))?;

    let user_id: Uuid = claims
        .sub
        .parse()
        .map_err(|_| ApiError::unauthorized("Invalid token"))?;

    let user = auth_state
        .db
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("User not found"))?;

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        email: user.email,
        role: Role::from(user.role.as_str()),
    })
}
