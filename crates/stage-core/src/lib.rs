//! # stage-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the per-viewer engagement aggregation. This crate has zero dependencies on
//! infrastructure (database, storage, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::{summarize, EngagementSummary};
pub use entities::{Author, Emotion, EventKind, Reactable, ReactableEvent, UnknownVariant, User};
pub use error::DomainError;
pub use traits::{
    EventRepository, MediaStore, ReactableRepository, RepoResult, UserRepository,
};
pub use value_objects::{Id, IdParseError};
