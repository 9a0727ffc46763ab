//! Reactable event entity - an immutable record of a view or reaction
//!
//! Events are append-only facts. Nothing in the domain mutates or deletes
//! them; all derived state (viewed flags, reaction counts) is recomputed from
//! the log on every read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Id;

/// Emotion expressed by a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Emotion {
    Happy,
    Sad,
    Surprise,
}

impl Emotion {
    /// Stable wire name, also used as the TEXT column encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "HAPPY",
            Self::Sad => "SAD",
            Self::Surprise => "SURPRISE",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HAPPY" => Ok(Self::Happy),
            "SAD" => Ok(Self::Sad),
            "SURPRISE" => Ok(Self::Surprise),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Kind of a reactable event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    View,
    Reaction,
}

impl EventKind {
    /// Stable wire name, also used as the TEXT column encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Reaction => "REACTION",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIEW" => Ok(Self::View),
            "REACTION" => Ok(Self::Reaction),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Error when decoding an emotion or event kind from its wire name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

/// A single entry in the event log
///
/// Invariant: `emotion` is present if and only if `kind` is `Reaction`.
/// Enforced at write time by `is_well_formed`; the aggregation reads the log
/// assuming it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactableEvent {
    pub id: Id,
    /// Actor who viewed or reacted
    pub user_id: Id,
    /// Subject reactable
    pub reactable_id: Id,
    pub timestamp: DateTime<Utc>,
    pub kind: EventKind,
    pub emotion: Option<Emotion>,
}

impl ReactableEvent {
    /// Create a view event
    pub fn view(user_id: Id, reactable_id: Id, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Id::default(),
            user_id,
            reactable_id,
            timestamp,
            kind: EventKind::View,
            emotion: None,
        }
    }

    /// Create a reaction event
    pub fn reaction(
        user_id: Id,
        reactable_id: Id,
        timestamp: DateTime<Utc>,
        emotion: Emotion,
    ) -> Self {
        Self {
            id: Id::default(),
            user_id,
            reactable_id,
            timestamp,
            kind: EventKind::Reaction,
            emotion: Some(emotion),
        }
    }

    /// Check the emotion-iff-reaction invariant
    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            EventKind::Reaction => self.emotion.is_some(),
            EventKind::View => self.emotion.is_none(),
        }
    }
}
