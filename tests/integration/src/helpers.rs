//! Test helpers for integration tests
//!
//! Provides an in-memory store implementing every port the services need,
//! with query counters for asserting batching behavior.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use stage_common::FeedConfig;
use stage_core::entities::{Author, Reactable, ReactableEvent, User};
use stage_core::traits::{
    EventRepository, MediaStore, ReactableRepository, RepoResult, UserRepository,
};
use stage_core::value_objects::Id;
use stage_service::{ServiceContext, ServiceContextBuilder};

/// In-memory backing store shared by all four ports
///
/// IDs are allocated from a single counter, mirroring a store-assigned key
/// space. Query counters only track the batched lookups the enrichment path
/// issues.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    reactables: Mutex<Vec<Reactable>>,
    events: Mutex<Vec<ReactableEvent>>,
    next_id: AtomicI64,
    media_saves: AtomicI64,
    pub author_queries: AtomicUsize,
    pub event_queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        })
    }

    fn allocate_id(&self) -> Id {
        Id::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn reset_query_counters(&self) {
        self.author_queries.store(0, Ordering::SeqCst);
        self.event_queries.store(0, Ordering::SeqCst);
    }

    pub fn author_query_count(&self) -> usize {
        self.author_queries.load(Ordering::SeqCst)
    }

    pub fn event_query_count(&self) -> usize {
        self.event_queries.load(Ordering::SeqCst)
    }

    /// Seed a user directly, bypassing the service layer
    pub fn seed_user(&self, first_name: &str, last_name: &str) -> User {
        let user = User::new(
            self.allocate_id(),
            first_name.to_string(),
            last_name.to_string(),
            format!("device-{first_name}"),
        );
        self.users.lock().push(user.clone());
        user
    }

    /// Seed a reactable directly, bypassing the service layer
    pub fn seed_reactable(&self, director_id: Id, created: chrono::DateTime<chrono::Utc>) -> Id {
        let mut reactable = Reactable::new(director_id, created, Some("mem://seeded".into()));
        reactable.id = self.allocate_id();
        let id = reactable.id;
        self.reactables.lock().push(reactable);
        id
    }

    /// Seed an event directly, bypassing the service layer
    pub fn seed_event(&self, mut event: ReactableEvent) {
        event.id = self.allocate_id();
        self.events.lock().push(event);
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self.users.lock().iter().find(|u| u.id == id).cloned())
    }

    async fn exists(&self, id: Id) -> RepoResult<bool> {
        Ok(self.users.lock().iter().any(|u| u.id == id))
    }

    async fn create(&self, user: &User) -> RepoResult<Id> {
        let mut stored = user.clone();
        stored.id = self.allocate_id();
        let id = stored.id;
        self.users.lock().push(stored);
        Ok(id)
    }

    async fn find_authors_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Author>> {
        self.author_queries.fetch_add(1, Ordering::SeqCst);
        assert!(!ids.is_empty(), "empty filter set must not reach the store");
        Ok(self
            .users
            .lock()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(User::to_author)
            .collect())
    }
}

#[async_trait]
impl ReactableRepository for InMemoryStore {
    async fn find_recent(&self, limit: i64) -> RepoResult<Vec<Reactable>> {
        let mut all: Vec<Reactable> = self.reactables.lock().clone();
        all.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        all.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(all)
    }

    async fn find_by_director(&self, id: Id, limit: i64) -> RepoResult<Vec<Reactable>> {
        let mut own: Vec<Reactable> = self
            .reactables
            .lock()
            .iter()
            .filter(|r| r.director_id == id)
            .cloned()
            .collect();
        own.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        own.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(own)
    }

    async fn create(&self, reactable: &Reactable) -> RepoResult<Id> {
        let mut stored = reactable.clone();
        stored.id = self.allocate_id();
        let id = stored.id;
        self.reactables.lock().push(stored);
        Ok(id)
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_by_reactables(&self, ids: &[Id]) -> RepoResult<Vec<ReactableEvent>> {
        self.event_queries.fetch_add(1, Ordering::SeqCst);
        assert!(!ids.is_empty(), "empty filter set must not reach the store");
        Ok(self
            .events
            .lock()
            .iter()
            .filter(|e| ids.contains(&e.reactable_id))
            .cloned()
            .collect())
    }

    async fn create(&self, event: &ReactableEvent) -> RepoResult<Id> {
        let mut stored = event.clone();
        stored.id = self.allocate_id();
        let id = stored.id;
        self.events.lock().push(stored);
        Ok(id)
    }
}

#[async_trait]
impl MediaStore for InMemoryStore {
    async fn save(&self, _bytes: &[u8], _content_type: &str) -> RepoResult<String> {
        let n = self.media_saves.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mem://media/{n}"))
    }
}

/// Build a [`ServiceContext`] backed by one shared in-memory store
pub fn test_context(store: &Arc<InMemoryStore>) -> ServiceContext {
    test_context_with_feed(
        store,
        FeedConfig {
            theater_limit: 10,
            repertoire_limit: 10,
        },
    )
}

/// Build a context with custom feed limits
pub fn test_context_with_feed(store: &Arc<InMemoryStore>, feed: FeedConfig) -> ServiceContext {
    ServiceContextBuilder::new()
        .reactable_repo(Arc::clone(store) as Arc<dyn ReactableRepository>)
        .user_repo(Arc::clone(store) as Arc<dyn UserRepository>)
        .event_repo(Arc::clone(store) as Arc<dyn EventRepository>)
        .media_store(Arc::clone(store) as Arc<dyn MediaStore>)
        .feed(feed)
        .build()
        .expect("all dependencies provided")
}
