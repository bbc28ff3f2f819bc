// Postgres storage layer with sqlx
//
// This crate provides the repository (`Database`), row models, the
// transactional booking path and password hashing. Migrations are embedded
// and applied with `Database::migrate`.

pub mod booking_store;
pub mod models;
pub mod password;
pub mod repositories;

pub use models::*;
pub use password::{hash_password, verify_password};
pub use repositories::Database;
