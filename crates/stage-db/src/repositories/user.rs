//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stage_core::entities::{Author, User};
use stage_core::traits::{RepoResult, UserRepository};
use stage_core::value_objects::Id;

use crate::models::{AuthorModel, UserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, device_id, joined
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Id) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &User) -> RepoResult<Id> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (first_name, last_name, device_id, joined)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.device_id)
        .bind(user.joined)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Id::new(id))
    }

    // The SELECT list is the privacy boundary: only the two name fields are
    // ever read, regardless of what else the users table carries.
    #[instrument(skip(self))]
    async fn find_authors_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Author>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, AuthorModel>(
            r"
            SELECT id, first_name, last_name
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Author::from).collect())
    }
}
