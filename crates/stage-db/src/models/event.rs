//! Reactable event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactable_events table (append-only)
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub user_id: i64,
    pub reactable_id: i64,
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    pub emotion: Option<String>,
}
