//! PostgreSQL implementation of EventRepository
//!
//! The reactable_events table is append-only: this repository exposes a
//! batch read and an insert, nothing else.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stage_core::entities::ReactableEvent;
use stage_core::traits::{EventRepository, RepoResult};
use stage_core::value_objects::Id;

use crate::models::EventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_reactables(&self, ids: &[Id]) -> RepoResult<Vec<ReactableEvent>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, user_id, reactable_id, timestamp, kind, emotion
            FROM reactable_events
            WHERE reactable_id = ANY($1)
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ReactableEvent::try_from).collect()
    }

    #[instrument(skip(self, event))]
    async fn create(&self, event: &ReactableEvent) -> RepoResult<Id> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO reactable_events (user_id, reactable_id, timestamp, kind, emotion)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(event.user_id.into_inner())
        .bind(event.reactable_id.into_inner())
        .bind(event.timestamp)
        .bind(event.kind.as_str())
        .bind(event.emotion.map(|e| e.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Id::new(id))
    }
}
