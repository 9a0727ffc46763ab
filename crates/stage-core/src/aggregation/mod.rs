//! Per-viewer engagement aggregation
//!
//! Folds one reactable's slice of the event log into the derived state the
//! client sees: whether the viewer has seen it, the per-emotion reaction
//! breakdown, and the viewer's own reaction. Pure computation over an
//! unordered, possibly duplicate-laden event batch; all deduplication
//! happens here.

use std::collections::{HashMap, HashSet};

use crate::entities::{Emotion, EventKind, ReactableEvent};
use crate::value_objects::Id;

/// Derived per-viewer state for one reactable
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngagementSummary {
    pub viewed: bool,
    pub reaction_counts: HashMap<Emotion, u64>,
    pub viewer_reaction: Option<Emotion>,
}

/// Compute the engagement summary for one reactable.
///
/// `events` is the full event subset for that reactable, in no particular
/// order. Rules:
///
/// - The director has always seen their own content: if `viewer_id` equals
///   `director_id`, `viewed` is true even with zero events, and no viewer
///   reaction is reported.
/// - Otherwise `viewed` is true iff the viewer has at least one VIEW event;
///   repeats are idempotent.
/// - Reaction counts are the number of distinct non-director actors per
///   emotion. The director's own reactions never count. An actor who reacted
///   with two different emotions appears in both buckets.
/// - The viewer's reaction is any one of their REACTION events' emotions
///   (find-first among an unordered batch), absent if they never reacted.
///
/// REACTION events missing an emotion violate the write-time invariant and
/// are skipped rather than counted.
pub fn summarize(director_id: Id, viewer_id: Id, events: &[ReactableEvent]) -> EngagementSummary {
    let viewer_is_director = viewer_id == director_id;

    let viewed = viewer_is_director
        || events
            .iter()
            .any(|event| event.kind == EventKind::View && event.user_id == viewer_id);

    // Emotion -> distinct reacting actors. The set makes the
    // once-per-actor-per-emotion invariant structural.
    let mut actors_by_emotion: HashMap<Emotion, HashSet<Id>> = HashMap::new();
    for event in events {
        if event.kind != EventKind::Reaction || event.user_id == director_id {
            continue;
        }
        if let Some(emotion) = event.emotion {
            actors_by_emotion.entry(emotion).or_default().insert(event.user_id);
        }
    }
    let reaction_counts = actors_by_emotion
        .into_iter()
        .map(|(emotion, actors)| (emotion, actors.len() as u64))
        .collect();

    let viewer_reaction = if viewer_is_director {
        None
    } else {
        events
            .iter()
            .find(|event| event.kind == EventKind::Reaction && event.user_id == viewer_id)
            .and_then(|event| event.emotion)
    };

    EngagementSummary {
        viewed,
        reaction_counts,
        viewer_reaction,
    }
}
