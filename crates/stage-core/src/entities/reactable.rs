//! Reactable entity - a content item users view and react to

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::entities::{Author, Emotion};
use crate::value_objects::Id;

/// A reactable content item (e.g. a single-pose image)
///
/// The base fields (`id`, `director_id`, `created`, `media_url`) are set by
/// the creation flow and never change. The derived fields (`director`,
/// `viewed`, `reaction_counts`, `viewer_reaction`) carry defaults until the
/// enricher fills them in for a specific viewer; they are meaningless before
/// that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactable {
    pub id: Id,
    /// User who created this reactable
    pub director_id: Id,
    pub created: DateTime<Utc>,
    /// Public URL of the media, if uploaded
    pub media_url: Option<String>,

    // Derived, per-viewer state
    pub director: Option<Author>,
    pub viewed: bool,
    pub reaction_counts: HashMap<Emotion, u64>,
    pub viewer_reaction: Option<Emotion>,
}

impl Reactable {
    /// Create a new un-enriched Reactable
    pub fn new(director_id: Id, created: DateTime<Utc>, media_url: Option<String>) -> Self {
        Self {
            id: Id::default(),
            director_id,
            created,
            media_url,
            director: None,
            viewed: false,
            reaction_counts: HashMap::new(),
            viewer_reaction: None,
        }
    }

    /// Check whether the given user is this reactable's director
    #[inline]
    pub fn is_directed_by(&self, user_id: Id) -> bool {
        self.director_id == user_id
    }
}
