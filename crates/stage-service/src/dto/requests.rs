//! Request DTOs for the service surface
//!
//! All request DTOs implement `Deserialize` and, where inputs need checking,
//! `Validate`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use stage_core::entities::{Emotion, EventKind};
use stage_core::value_objects::Id;

// ============================================================================
// User Requests
// ============================================================================

/// New user sign-up request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 128, message = "Device ID must be 1-128 characters"))]
    pub device_id: String,
}

// ============================================================================
// Theater Requests
// ============================================================================

/// Record a view or reaction against a reactable
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEventRequest {
    /// Actor performing the event
    pub user_id: Id,

    /// Subject reactable
    pub reactable_id: Id,

    pub kind: EventKind,

    /// Required for reactions, forbidden for views
    #[serde(default)]
    pub emotion: Option<Emotion>,

    /// Client-side event time; server time is used when absent
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

// ============================================================================
// Studio Requests
// ============================================================================

/// Publish a new reactable
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReactableRequest {
    /// Director publishing the reactable
    pub director_id: Id,

    /// Client-side creation time; publishing rejects requests without one
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Raw media payload accompanying a [`SaveReactableRequest`]
///
/// Arrives out of band (a multipart upload part, not JSON), so this is a
/// plain struct rather than a `Deserialize` DTO.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl MediaUpload {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
