//! Reactable event entity <-> model mapper

use stage_core::entities::{Emotion, EventKind, ReactableEvent};
use stage_core::error::DomainError;
use stage_core::value_objects::Id;

use crate::models::EventModel;

/// Decoding can fail on an unknown TEXT value; such rows violate the
/// write-time invariant and surface as malformed-event errors.
impl TryFrom<EventModel> for ReactableEvent {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        let kind: EventKind = model
            .kind
            .parse()
            .map_err(|_| DomainError::MalformedEvent(format!("unknown event kind: {}", model.kind)))?;
        let emotion = model
            .emotion
            .as_deref()
            .map(str::parse::<Emotion>)
            .transpose()
            .map_err(|_| {
                DomainError::MalformedEvent(format!(
                    "unknown emotion: {}",
                    model.emotion.unwrap_or_default()
                ))
            })?;

        Ok(ReactableEvent {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            reactable_id: Id::new(model.reactable_id),
            timestamp: model.timestamp,
            kind,
            emotion,
        })
    }
}
