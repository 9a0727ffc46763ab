//! Service context - dependency container for services
//!
//! Holds the store ports and configuration needed by services. Stores are
//! constructor-injected trait objects rather than process-wide singletons,
//! so tests substitute in-memory fakes without touching globals.

use std::sync::Arc;

use stage_common::FeedConfig;
use stage_core::traits::{EventRepository, MediaStore, ReactableRepository, UserRepository};

/// Service context containing all dependencies
///
/// Passed by reference to every service. The context itself holds no mutable
/// state; two concurrent requests share nothing but the store handles.
#[derive(Clone)]
pub struct ServiceContext {
    reactable_repo: Arc<dyn ReactableRepository>,
    user_repo: Arc<dyn UserRepository>,
    event_repo: Arc<dyn EventRepository>,
    media_store: Arc<dyn MediaStore>,
    feed: FeedConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reactable_repo: Arc<dyn ReactableRepository>,
        user_repo: Arc<dyn UserRepository>,
        event_repo: Arc<dyn EventRepository>,
        media_store: Arc<dyn MediaStore>,
        feed: FeedConfig,
    ) -> Self {
        Self {
            reactable_repo,
            user_repo,
            event_repo,
            media_store,
            feed,
        }
    }

    /// Get the reactable repository
    pub fn reactable_repo(&self) -> &dyn ReactableRepository {
        self.reactable_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the media store
    pub fn media_store(&self) -> &dyn MediaStore {
        self.media_store.as_ref()
    }

    /// Get the feed limits
    pub fn feed(&self) -> &FeedConfig {
        &self.feed
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("media_store", &"...")
            .field("feed", &self.feed)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    reactable_repo: Option<Arc<dyn ReactableRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    media_store: Option<Arc<dyn MediaStore>>,
    feed: Option<FeedConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reactable_repo: None,
            user_repo: None,
            event_repo: None,
            media_store: None,
            feed: None,
        }
    }

    pub fn reactable_repo(mut self, repo: Arc<dyn ReactableRepository>) -> Self {
        self.reactable_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    pub fn feed(mut self, feed: FeedConfig) -> Self {
        self.feed = Some(feed);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;
        Ok(ServiceContext::new(
            self.reactable_repo
                .ok_or_else(|| ServiceError::validation("reactable_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.media_store
                .ok_or_else(|| ServiceError::validation("media_store is required"))?,
            self.feed
                .ok_or_else(|| ServiceError::validation("feed config is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
