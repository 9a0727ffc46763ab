//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub device_id: String,
    pub joined: DateTime<Utc>,
}

/// Projection row for author lookups: only the shareable name fields are
/// ever selected, so nothing else can leak past this type.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}
