//! Studio service
//!
//! Publishes new reactables: persists the media payload, then the reactable
//! row pointing at it.

use tracing::{info, instrument};

use stage_core::aggregation::summarize;
use stage_core::entities::Reactable;

use crate::dto::{MediaUpload, ReactableResponse, SaveReactableRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Studio service
pub struct StudioService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StudioService<'a> {
    /// Create a new StudioService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a new reactable and its media, returning the saved item as
    /// the director sees it.
    ///
    /// Media is written before the row so a failed insert never leaves a
    /// reactable pointing at nothing; an orphaned media object is tolerable,
    /// a dangling URL is not.
    #[instrument(skip(self, request, media), fields(director = %request.director_id))]
    pub async fn save(
        &self,
        request: SaveReactableRequest,
        media: MediaUpload,
    ) -> ServiceResult<ReactableResponse> {
        if media.is_empty() {
            return Err(ServiceError::validation("Request is missing a media part"));
        }
        let created = request
            .created
            .ok_or_else(|| ServiceError::validation("Request is missing a created timestamp"))?;

        let director = self
            .ctx
            .user_repo()
            .find_by_id(request.director_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("User", request.director_id.to_string())
            })?;

        let media_url = self
            .ctx
            .media_store()
            .save(&media.bytes, &media.content_type)
            .await?;

        let mut reactable = Reactable::new(request.director_id, created, Some(media_url));
        reactable.id = self.ctx.reactable_repo().create(&reactable).await?;

        info!(reactable = %reactable.id, "Published reactable");

        // The director is the viewer of their own save response
        let summary = summarize(reactable.director_id, director.id, &[]);
        reactable.director = Some(director.to_author());
        reactable.viewed = summary.viewed;
        reactable.reaction_counts = summary.reaction_counts;
        reactable.viewer_reaction = summary.viewer_reaction;

        Ok(ReactableResponse::from(&reactable))
    }
}
