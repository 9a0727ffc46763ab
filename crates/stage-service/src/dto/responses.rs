//! Response DTOs for the service surface
//!
//! All response DTOs implement `Serialize` for JSON output. IDs are
//! serialized as strings for JavaScript compatibility.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use stage_core::entities::Emotion;

// ============================================================================
// User Responses
// ============================================================================

/// Full user view, returned to the account owner
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub joined: DateTime<Utc>,
}

/// Public identity of a reactable's director
///
/// Deliberately narrower than [`UserResponse`]: no device identifier, no
/// join date. This is everything other users get to see.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

// ============================================================================
// Reactable Responses
// ============================================================================

/// A reactable enriched for the requesting viewer
#[derive(Debug, Clone, Serialize)]
pub struct ReactableResponse {
    pub id: String,

    /// Absent when the directing account no longer resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<AuthorResponse>,

    pub created: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,

    pub viewed: bool,

    pub reaction_counts: HashMap<Emotion, u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_reaction: Option<Emotion>,
}
