//! Reactable database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactables table
///
/// Only the immutable base fields live in the table; derived per-viewer
/// state is recomputed from the event log on every read.
#[derive(Debug, Clone, FromRow)]
pub struct ReactableModel {
    pub id: i64,
    pub director_id: i64,
    pub created: DateTime<Utc>,
    pub media_url: Option<String>,
}
