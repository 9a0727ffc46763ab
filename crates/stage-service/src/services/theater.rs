//! Theater service
//!
//! Serves the shared feed of recently published reactables and records the
//! view/reaction events viewers produce while watching it.

use chrono::Utc;
use tracing::{info, instrument};

use stage_core::entities::{EventKind, ReactableEvent};
use stage_core::value_objects::Id;

use crate::dto::{ReactableResponse, RecordEventRequest};

use super::context::ServiceContext;
use super::enrichment::Enricher;
use super::error::{ServiceError, ServiceResult};

/// Theater service
pub struct TheaterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TheaterService<'a> {
    /// Create a new TheaterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the feed for `viewer_id`: the most recently published
    /// reactables, newest first, enriched for that viewer.
    #[instrument(skip(self))]
    pub async fn fetch(&self, viewer_id: Id) -> ServiceResult<Vec<ReactableResponse>> {
        let viewer = self
            .ctx
            .user_repo()
            .find_by_id(viewer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", viewer_id.to_string()))?;

        let mut reactables = self
            .ctx
            .reactable_repo()
            .find_recent(self.ctx.feed().theater_limit)
            .await?;

        if reactables.is_empty() {
            return Ok(Vec::new());
        }

        Enricher::new(self.ctx).enrich(&mut reactables, &viewer).await?;
        Ok(reactables.iter().map(ReactableResponse::from).collect())
    }

    /// Append a view or reaction to the event log.
    ///
    /// Events are append-only facts; nothing is recomputed here. The derived
    /// state shows up on the next enriched fetch.
    #[instrument(skip(self, request), fields(user = %request.user_id, reactable = %request.reactable_id))]
    pub async fn record_event(&self, request: RecordEventRequest) -> ServiceResult<Id> {
        match request.kind {
            EventKind::Reaction if request.emotion.is_none() => {
                return Err(ServiceError::validation("Reaction event requires an emotion"));
            }
            EventKind::View if request.emotion.is_some() => {
                return Err(ServiceError::validation("View event cannot carry an emotion"));
            }
            _ => {}
        }

        let user_exists = self.ctx.user_repo().exists(request.user_id).await?;
        if !user_exists {
            return Err(ServiceError::not_found("User", request.user_id.to_string()));
        }

        let timestamp = request.timestamp.unwrap_or_else(Utc::now);
        let event = match request.kind {
            EventKind::View => {
                ReactableEvent::view(request.user_id, request.reactable_id, timestamp)
            }
            EventKind::Reaction => ReactableEvent::reaction(
                request.user_id,
                request.reactable_id,
                timestamp,
                // Checked above
                request.emotion.ok_or_else(|| {
                    ServiceError::validation("Reaction event requires an emotion")
                })?,
            ),
        };

        let event_id = self.ctx.event_repo().create(&event).await?;
        info!(event = %event_id, kind = %event.kind, "Recorded theater event");
        Ok(event_id)
    }
}
