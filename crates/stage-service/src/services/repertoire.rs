//! Repertoire service
//!
//! Serves a director their own published reactables. The director is also
//! the viewer here, so every item comes back with the self-view short
//! circuit applied: viewed, and never a viewer reaction.

use tracing::instrument;

use stage_core::value_objects::Id;

use crate::dto::ReactableResponse;

use super::context::ServiceContext;
use super::enrichment::Enricher;
use super::error::{ServiceError, ServiceResult};

/// Repertoire service
pub struct RepertoireService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RepertoireService<'a> {
    /// Create a new RepertoireService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch `user_id`'s own reactables, newest first, enriched for them.
    #[instrument(skip(self))]
    pub async fn fetch(&self, user_id: Id) -> ServiceResult<Vec<ReactableResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut reactables = self
            .ctx
            .reactable_repo()
            .find_by_director(user_id, self.ctx.feed().repertoire_limit)
            .await?;

        if reactables.is_empty() {
            return Ok(Vec::new());
        }

        Enricher::new(self.ctx).enrich(&mut reactables, &user).await?;
        Ok(reactables.iter().map(ReactableResponse::from).collect())
    }
}
