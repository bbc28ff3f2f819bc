// Authentication module
// Decision: JWT bearer tokens with argon2-hashed passwords; a single access
// token per login, no refresh flow

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::AuthConfig;
pub use middleware::{AdminUser, AuthState, AuthUser, FromRef};
pub use routes::routes;
