//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Duration, Utc};

use stage_core::entities::{Emotion, ReactableEvent};
use stage_core::value_objects::Id;
use stage_service::dto::{MediaUpload, RecordEventRequest, SaveReactableRequest};

/// A fixed anchor time; seeded items offset from it for deterministic order
pub fn anchor_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2017-06-01T12:00:00Z")
        .expect("valid anchor timestamp")
        .with_timezone(&Utc)
}

/// `minutes` past the anchor
pub fn minutes_after(minutes: i64) -> DateTime<Utc> {
    anchor_time() + Duration::minutes(minutes)
}

/// A view event fixture
pub fn view(user_id: Id, reactable_id: Id) -> ReactableEvent {
    ReactableEvent::view(user_id, reactable_id, anchor_time())
}

/// A reaction event fixture
pub fn reaction(user_id: Id, reactable_id: Id, emotion: Emotion) -> ReactableEvent {
    ReactableEvent::reaction(user_id, reactable_id, anchor_time(), emotion)
}

/// A view request as a client would send it
pub fn view_request(user_id: Id, reactable_id: Id) -> RecordEventRequest {
    RecordEventRequest {
        user_id,
        reactable_id,
        kind: stage_core::entities::EventKind::View,
        emotion: None,
        timestamp: None,
    }
}

/// A reaction request as a client would send it
pub fn reaction_request(user_id: Id, reactable_id: Id, emotion: Emotion) -> RecordEventRequest {
    RecordEventRequest {
        user_id,
        reactable_id,
        kind: stage_core::entities::EventKind::Reaction,
        emotion: Some(emotion),
        timestamp: None,
    }
}

/// A publish request plus a small media payload
pub fn publish_request(director_id: Id) -> (SaveReactableRequest, MediaUpload) {
    (
        SaveReactableRequest {
            director_id,
            created: Some(anchor_time()),
        },
        MediaUpload::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg"),
    )
}
