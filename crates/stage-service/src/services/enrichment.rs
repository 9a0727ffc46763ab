//! Reactable enrichment
//!
//! Fills in the derived, per-viewer state of a batch of reactables before
//! they leave the service layer: the director's public identity, the viewed
//! flag, the reaction-count breakdown, and the viewer's own reaction.
//!
//! Both lookups are batched: N reactables from M distinct directors cost one
//! author query and one event query, never N. An ID set that is empty after
//! dedup skips the store entirely - an empty filter must never be sent to a
//! store where it would mean "match everything".

use std::collections::{HashMap, HashSet};
use std::future::Future;

use tracing::instrument;

use stage_core::aggregation::summarize;
use stage_core::entities::{Author, Reactable, ReactableEvent, User};
use stage_core::traits::RepoResult;
use stage_core::value_objects::Id;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Enrichment orchestrator
pub struct Enricher<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Enricher<'a> {
    /// Create a new Enricher
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Enrich `reactables` in place for `viewer`.
    ///
    /// A director that cannot be resolved leaves its reactables with
    /// `director = None`; event enrichment still runs for them. A failed
    /// store fetch fails the whole call - no partial batch is returned.
    /// Callers short-circuit empty batches before getting here.
    #[instrument(skip(self, reactables, viewer), fields(batch = reactables.len(), viewer = %viewer.id))]
    pub async fn enrich(&self, reactables: &mut [Reactable], viewer: &User) -> ServiceResult<()> {
        self.enrich_directors(reactables).await?;
        self.enrich_events(reactables, viewer).await?;
        Ok(())
    }

    /// Attach the public Author projection to each reactable by director id
    async fn enrich_directors(&self, reactables: &mut [Reactable]) -> ServiceResult<()> {
        let ids = dedup_ids(reactables.iter().map(|r| r.director_id));
        let authors = batched_fetch(ids, |ids| async move {
            self.ctx.user_repo().find_authors_by_ids(&ids).await
        })
        .await?;

        let by_id: HashMap<Id, Author> =
            authors.into_iter().map(|author| (author.id, author)).collect();
        for reactable in reactables.iter_mut() {
            reactable.director = by_id.get(&reactable.director_id).cloned();
        }
        Ok(())
    }

    /// Fold each reactable's slice of the event log into its derived state
    async fn enrich_events(&self, reactables: &mut [Reactable], viewer: &User) -> ServiceResult<()> {
        let ids = dedup_ids(reactables.iter().map(|r| r.id));
        let events = batched_fetch(ids, |ids| async move {
            self.ctx.event_repo().find_by_reactables(&ids).await
        })
        .await?;

        let mut by_reactable: HashMap<Id, Vec<ReactableEvent>> = HashMap::new();
        for event in events {
            by_reactable.entry(event.reactable_id).or_default().push(event);
        }

        for reactable in reactables.iter_mut() {
            let subset = by_reactable
                .get(&reactable.id)
                .map_or(&[][..], Vec::as_slice);
            let summary = summarize(reactable.director_id, viewer.id, subset);
            reactable.viewed = summary.viewed;
            reactable.reaction_counts = summary.reaction_counts;
            reactable.viewer_reaction = summary.viewer_reaction;
        }
        Ok(())
    }
}

/// Deduplicate an ID stream into a single filter set
fn dedup_ids(ids: impl Iterator<Item = Id>) -> Vec<Id> {
    let set: HashSet<Id> = ids.collect();
    set.into_iter().collect()
}

/// The shared batched-lookup shape: skip the store entirely on an empty
/// filter set, otherwise dispatch exactly one set-membership query.
async fn batched_fetch<T, F, Fut>(ids: Vec<Id>, fetch: F) -> ServiceResult<Vec<T>>
where
    F: FnOnce(Vec<Id>) -> Fut,
    Fut: Future<Output = RepoResult<Vec<T>>>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(fetch(ids).await?)
}
