//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The enrichment engine only ever consumes the
//! batch read methods; writes belong to the creation and event-recording
//! flows.

use async_trait::async_trait;

use crate::entities::{Author, Reactable, ReactableEvent, User};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reactable Repository (content store)
// ============================================================================

#[async_trait]
pub trait ReactableRepository: Send + Sync {
    /// List the most recently created reactables, newest first
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Reactable>>;

    /// List a director's own reactables, newest first
    async fn find_by_director(&self, director_id: Id, limit: i64) -> RepoResult<Vec<Reactable>>;

    /// Persist a new reactable; the store allocates and returns its id
    async fn create(&self, reactable: &Reactable) -> RepoResult<Id>;
}

// ============================================================================
// User Repository (content store, author side)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Check whether a user record exists
    async fn exists(&self, id: Id) -> RepoResult<bool>;

    /// Create a new user; the store allocates and returns its id
    async fn create(&self, user: &User) -> RepoResult<Id>;

    /// Batch-fetch the public Author projection for each id that resolves.
    ///
    /// Ids with no matching record are silently absent from the result.
    /// Implementations must project only the two name fields; no other user
    /// field may be read. Callers never pass an empty set - they short-circuit
    /// instead, since an empty filter must not mean "match everything".
    async fn find_authors_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Author>>;
}

// ============================================================================
// Event Repository (append-only event store)
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetch every event whose subject is in `ids`, unordered, duplicates
    /// included. Callers never pass an empty set (same short-circuit rule as
    /// `find_authors_by_ids`).
    async fn find_by_reactables(&self, ids: &[Id]) -> RepoResult<Vec<ReactableEvent>>;

    /// Append an event to the log; the store allocates and returns its id.
    /// There are deliberately no update or delete methods.
    async fn create(&self, event: &ReactableEvent) -> RepoResult<Id>;
}

// ============================================================================
// Media Store (blob store)
// ============================================================================

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store media bytes and return a public URL for them
    async fn save(&self, bytes: &[u8], content_type: &str) -> RepoResult<String>;
}
