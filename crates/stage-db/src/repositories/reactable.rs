//! PostgreSQL implementation of ReactableRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stage_core::entities::Reactable;
use stage_core::traits::{ReactableRepository, RepoResult};
use stage_core::value_objects::Id;

use crate::models::ReactableModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactableRepository
#[derive(Clone)]
pub struct PgReactableRepository {
    pool: PgPool,
}

impl PgReactableRepository {
    /// Create a new PgReactableRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactableRepository for PgReactableRepository {
    #[instrument(skip(self))]
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Reactable>> {
        let results = sqlx::query_as::<_, ReactableModel>(
            r"
            SELECT id, director_id, created, media_url
            FROM reactables
            ORDER BY created DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reactable::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_director(&self, director_id: Id, limit: i64) -> RepoResult<Vec<Reactable>> {
        let results = sqlx::query_as::<_, ReactableModel>(
            r"
            SELECT id, director_id, created, media_url
            FROM reactables
            WHERE director_id = $1
            ORDER BY created DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(director_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reactable::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reactable: &Reactable) -> RepoResult<Id> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO reactables (director_id, created, media_url)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(reactable.director_id.into_inner())
        .bind(reactable.created)
        .bind(reactable.media_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Id::new(id))
    }
}
