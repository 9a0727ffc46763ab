//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use stage_core::entities::{Author, Reactable, User};

use super::responses::{AuthorResponse, ReactableResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            joined: user.joined,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
        }
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self::from(&author)
    }
}

// ============================================================================
// Reactable Mappers
// ============================================================================

impl From<&Reactable> for ReactableResponse {
    fn from(reactable: &Reactable) -> Self {
        Self {
            id: reactable.id.to_string(),
            director: reactable.director.as_ref().map(AuthorResponse::from),
            created: reactable.created,
            media_url: reactable.media_url.clone(),
            viewed: reactable.viewed,
            reaction_counts: reactable.reaction_counts.clone(),
            viewer_reaction: reactable.viewer_reaction,
        }
    }
}

impl From<Reactable> for ReactableResponse {
    fn from(reactable: Reactable) -> Self {
        Self::from(&reactable)
    }
}
