//! Service integration tests
//!
//! Drive the theater, repertoire, studio, and user services end to end
//! against a shared in-memory store. No database required.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use integration_tests::{
    anchor_time, minutes_after, publish_request, reaction, reaction_request, test_context,
    test_context_with_feed, view, view_request, InMemoryStore,
};
use stage_common::FeedConfig;
use stage_core::entities::Emotion;
use stage_service::{RepertoireService, StudioService, TheaterService, UserService};

// ============================================================================
// Theater Feed Tests
// ============================================================================

#[tokio::test]
async fn test_theater_returns_newest_first_capped_at_limit() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let director = store.seed_user("Dana", "Director");
    let viewer = store.seed_user("Vera", "Viewer");

    let ids: Vec<_> = (0..12)
        .map(|i| store.seed_reactable(director.id, minutes_after(i)))
        .collect();

    let feed = TheaterService::new(&ctx).fetch(viewer.id).await.unwrap();
    assert_eq!(feed.len(), 10);
    // Newest first: the two oldest items fell off
    assert_eq!(feed[0].id, ids[11].to_string());
    assert_eq!(feed[9].id, ids[2].to_string());
}

#[tokio::test]
async fn test_theater_feed_is_enriched_per_viewer() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let director = store.seed_user("Dana", "Director");
    let viewer = store.seed_user("Vera", "Viewer");
    let other = store.seed_user("Omar", "Other");

    let subject = store.seed_reactable(director.id, anchor_time());
    store.seed_event(view(viewer.id, subject));
    store.seed_event(reaction(viewer.id, subject, Emotion::Happy));
    store.seed_event(reaction(other.id, subject, Emotion::Sad));

    let feed = TheaterService::new(&ctx).fetch(viewer.id).await.unwrap();
    assert_eq!(feed.len(), 1);
    let item = &feed[0];
    assert_eq!(item.director.as_ref().unwrap().first_name, "Dana");
    assert!(item.viewed);
    assert_eq!(item.reaction_counts.get(&Emotion::Happy), Some(&1));
    assert_eq!(item.reaction_counts.get(&Emotion::Sad), Some(&1));
    assert_eq!(item.viewer_reaction, Some(Emotion::Happy));

    // The same feed for an actor with no events is unmarked
    let feed = TheaterService::new(&ctx).fetch(other.id).await.unwrap();
    let item = &feed[0];
    assert!(!item.viewed);
    assert_eq!(item.viewer_reaction, Some(Emotion::Sad));
}

#[tokio::test]
async fn test_theater_fetch_issues_one_query_per_store() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let directors: Vec<_> = (0..3).map(|i| store.seed_user(&format!("D{i}"), "Dir")).collect();
    let viewer = store.seed_user("Vera", "Viewer");

    for i in 0..9 {
        store.seed_reactable(directors[i % 3].id, minutes_after(i as i64));
    }

    store.reset_query_counters();
    let feed = TheaterService::new(&ctx).fetch(viewer.id).await.unwrap();
    assert_eq!(feed.len(), 9);
    assert_eq!(store.author_query_count(), 1);
    assert_eq!(store.event_query_count(), 1);
}

#[tokio::test]
async fn test_theater_empty_feed_skips_the_stores() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let viewer = store.seed_user("Vera", "Viewer");

    let feed = TheaterService::new(&ctx).fetch(viewer.id).await.unwrap();
    assert!(feed.is_empty());
    assert_eq!(store.author_query_count(), 0);
    assert_eq!(store.event_query_count(), 0);
}

#[tokio::test]
async fn test_theater_respects_configured_limit() {
    let store = InMemoryStore::new();
    let ctx = test_context_with_feed(
        &store,
        FeedConfig {
            theater_limit: 3,
            repertoire_limit: 10,
        },
    );
    let director = store.seed_user("Dana", "Director");
    let viewer = store.seed_user("Vera", "Viewer");
    for i in 0..5 {
        store.seed_reactable(director.id, minutes_after(i));
    }

    let feed = TheaterService::new(&ctx).fetch(viewer.id).await.unwrap();
    assert_eq!(feed.len(), 3);
}

// ============================================================================
// Event Recording Tests
// ============================================================================

#[tokio::test]
async fn test_recorded_reaction_shows_up_on_next_fetch() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let director = store.seed_user("Dana", "Director");
    let viewer = store.seed_user("Vera", "Viewer");
    let subject = store.seed_reactable(director.id, anchor_time());

    let theater = TheaterService::new(&ctx);
    theater.record_event(view_request(viewer.id, subject)).await.unwrap();
    theater
        .record_event(reaction_request(viewer.id, subject, Emotion::Surprise))
        .await
        .unwrap();

    let feed = theater.fetch(viewer.id).await.unwrap();
    let item = &feed[0];
    assert!(item.viewed);
    assert_eq!(item.viewer_reaction, Some(Emotion::Surprise));
    assert_eq!(item.reaction_counts.get(&Emotion::Surprise), Some(&1));
}

#[tokio::test]
async fn test_repeated_views_count_once() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let director = store.seed_user("Dana", "Director");
    let viewer = store.seed_user("Vera", "Viewer");
    let subject = store.seed_reactable(director.id, anchor_time());

    let theater = TheaterService::new(&ctx);
    for _ in 0..3 {
        theater.record_event(view_request(viewer.id, subject)).await.unwrap();
    }

    let feed = theater.fetch(viewer.id).await.unwrap();
    assert!(feed[0].viewed);
    assert!(feed[0].reaction_counts.is_empty());
}

#[tokio::test]
async fn test_director_reaction_to_own_item_is_not_counted() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let director = store.seed_user("Dana", "Director");
    let viewer = store.seed_user("Vera", "Viewer");
    let subject = store.seed_reactable(director.id, anchor_time());

    let theater = TheaterService::new(&ctx);
    theater
        .record_event(reaction_request(director.id, subject, Emotion::Happy))
        .await
        .unwrap();

    let feed = theater.fetch(viewer.id).await.unwrap();
    assert!(feed[0].reaction_counts.is_empty());
}

// ============================================================================
// Repertoire Tests
// ============================================================================

#[tokio::test]
async fn test_repertoire_only_returns_own_items() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let dana = store.seed_user("Dana", "Director");
    let omar = store.seed_user("Omar", "Other");

    let own = store.seed_reactable(dana.id, minutes_after(1));
    store.seed_reactable(omar.id, minutes_after(2));

    let repertoire = RepertoireService::new(&ctx).fetch(dana.id).await.unwrap();
    assert_eq!(repertoire.len(), 1);
    assert_eq!(repertoire[0].id, own.to_string());
}

#[tokio::test]
async fn test_repertoire_items_carry_audience_reactions() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let dana = store.seed_user("Dana", "Director");
    let vera = store.seed_user("Vera", "Viewer");
    let omar = store.seed_user("Omar", "Other");
    let subject = store.seed_reactable(dana.id, anchor_time());

    store.seed_event(reaction(vera.id, subject, Emotion::Happy));
    store.seed_event(reaction(omar.id, subject, Emotion::Happy));

    let repertoire = RepertoireService::new(&ctx).fetch(dana.id).await.unwrap();
    let item = &repertoire[0];
    assert_eq!(item.reaction_counts.get(&Emotion::Happy), Some(&2));
    // Directors see their own work as viewed, with no reaction of their own
    assert!(item.viewed);
    assert!(item.viewer_reaction.is_none());
}

// ============================================================================
// Studio Tests
// ============================================================================

#[tokio::test]
async fn test_published_reactable_reaches_both_feeds() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let dana = store.seed_user("Dana", "Director");
    let vera = store.seed_user("Vera", "Viewer");

    let (request, media) = publish_request(dana.id);
    let saved = StudioService::new(&ctx).save(request, media).await.unwrap();
    assert!(saved.media_url.as_deref().unwrap().starts_with("mem://media/"));

    let theater = TheaterService::new(&ctx).fetch(vera.id).await.unwrap();
    assert_eq!(theater.len(), 1);
    assert_eq!(theater[0].id, saved.id);

    let repertoire = RepertoireService::new(&ctx).fetch(dana.id).await.unwrap();
    assert_eq!(repertoire.len(), 1);
    assert_eq!(repertoire[0].id, saved.id);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_fetch_user() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);

    let created = UserService::new(&ctx)
        .create_user(stage_service::dto::CreateUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            device_id: "device-ada".to_string(),
        })
        .await
        .unwrap();

    let fetched = UserService::new(&ctx)
        .get_user(created.id.parse().unwrap())
        .await
        .unwrap();
    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Lovelace");
}

#[tokio::test]
async fn test_create_user_rejects_blank_name() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);

    let err = UserService::new(&ctx)
        .create_user(stage_service::dto::CreateUserRequest {
            first_name: String::new(),
            last_name: "Lovelace".to_string(),
            device_id: "device".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

// ============================================================================
// Full Engagement Walkthrough
// ============================================================================

#[tokio::test]
async fn test_engagement_walkthrough() {
    let store = InMemoryStore::new();
    let ctx = test_context(&store);
    let dana = store.seed_user("Dana", "Director");
    let vera = store.seed_user("Vera", "Viewer");
    let omar = store.seed_user("Omar", "Other");

    // Dana publishes; Vera views and reacts HAPPY; Omar reacts HAPPY and SAD;
    // Dana reacts to her own item.
    let (request, media) = publish_request(dana.id);
    let saved = StudioService::new(&ctx).save(request, media).await.unwrap();
    let subject = saved.id.parse().unwrap();

    let theater = TheaterService::new(&ctx);
    theater.record_event(view_request(vera.id, subject)).await.unwrap();
    theater
        .record_event(reaction_request(vera.id, subject, Emotion::Happy))
        .await
        .unwrap();
    theater
        .record_event(reaction_request(omar.id, subject, Emotion::Happy))
        .await
        .unwrap();
    theater
        .record_event(reaction_request(omar.id, subject, Emotion::Sad))
        .await
        .unwrap();
    theater
        .record_event(reaction_request(dana.id, subject, Emotion::Happy))
        .await
        .unwrap();

    // Vera's view of the item
    let feed = theater.fetch(vera.id).await.unwrap();
    let item = &feed[0];
    assert!(item.viewed);
    assert_eq!(item.reaction_counts.get(&Emotion::Happy), Some(&2));
    assert_eq!(item.reaction_counts.get(&Emotion::Sad), Some(&1));
    assert_eq!(item.viewer_reaction, Some(Emotion::Happy));

    // Dana's view of her own item
    let repertoire = RepertoireService::new(&ctx).fetch(dana.id).await.unwrap();
    let item = &repertoire[0];
    assert!(item.viewed);
    assert_eq!(item.reaction_counts.get(&Emotion::Happy), Some(&2));
    assert!(item.viewer_reaction.is_none());
}
