//! Cross-component integration tests
//!
//! These tests exercise the registry, catalog and queue engine together
//! without going through the HTTP layer.

use std::sync::Arc;

use queueease::catalog::CatalogStore;
use queueease::config::ValidationConfig;
use queueease::error::AppError;
use queueease::queue::{AdvanceSampler, LeaveStatus, QueueEngine, RandomSampler};
use queueease::registry::UserRegistry;
use queueease::session::SessionStore;

const PHONE: &str = "5551234567";

struct AlwaysAdvance;
impl AdvanceSampler for AlwaysAdvance {
    fn should_advance(&self) -> bool {
        true
    }
}

struct TestEnvironment {
    registry: UserRegistry,
    sessions: SessionStore,
    engine: QueueEngine,
}

fn create_test_environment(sampler: Box<dyn AdvanceSampler>) -> TestEnvironment {
    TestEnvironment {
        registry: UserRegistry::new(ValidationConfig::default()),
        sessions: SessionStore::new(),
        engine: QueueEngine::new(Arc::new(CatalogStore::new()), sampler),
    }
}

// =============================================================================
// Registration and session tests
// =============================================================================

#[test]
fn test_register_then_resolve_session() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    let profile = env.registry.register(PHONE, "Alice").unwrap();
    let token = env.sessions.create(PHONE);

    let resolved = env.sessions.resolve(&token).unwrap();
    assert_eq!(resolved, PHONE);
    assert_eq!(env.registry.get(&resolved).unwrap().name, profile.name);
}

#[test]
fn test_register_validation_never_mutates() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    assert!(matches!(
        env.registry.register("12345", "Alice"),
        Err(AppError::InvalidPhone)
    ));
    assert!(matches!(
        env.registry.register(PHONE, "A"),
        Err(AppError::InvalidName(_))
    ));
    assert!(env.registry.get("12345").is_none());
    assert!(env.registry.get(PHONE).is_none());
}

#[test]
fn test_duplicate_registration_fails_second_time() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    env.registry.register(PHONE, "Alice").unwrap();
    assert!(matches!(
        env.registry.register(PHONE, "Bob"),
        Err(AppError::PhoneAlreadyExists)
    ));
}

// =============================================================================
// Queue lifecycle tests
// =============================================================================

#[test]
fn test_join_seeds_position_from_baseline() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    // Catalog entry "1" (Bella Italia) has a baseline queue size of 8
    let entry = env.engine.join(PHONE, "1", "restaurants").unwrap();
    assert_eq!(entry.position, 9);
    assert_eq!(entry.total_in_queue, 9);
}

#[test]
fn test_position_is_monotonic_with_floor_of_one() {
    let env = create_test_environment(Box::new(AlwaysAdvance));
    env.engine.join(PHONE, "2", "restaurants").unwrap();

    let mut last = env.engine.current(PHONE).unwrap().position;
    for _ in 0..50 {
        let entry = env.engine.update_position(PHONE).unwrap();
        assert!(entry.position <= last);
        assert!(entry.position >= 1);
        last = entry.position;
    }
    assert_eq!(last, 1);
}

#[test]
fn test_leave_idempotent_when_not_queued() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    env.engine.leave(PHONE);
    assert!(env.engine.history(PHONE).is_empty());

    env.engine.join(PHONE, "3", "restaurants").unwrap();
    env.engine.leave(PHONE);
    env.engine.leave(PHONE);

    // Second leave found nothing to record
    assert_eq!(env.engine.history(PHONE).len(), 1);
}

#[test]
fn test_leave_records_history_and_clears_current() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    env.engine.join(PHONE, "b2", "banks").unwrap();
    env.engine.leave(PHONE);

    assert!(env.engine.current(PHONE).is_none());
    let history = env.engine.history(PHONE);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, LeaveStatus::Left);
    assert_eq!(history[0].entry.place_name, "City Credit Union");
}

#[test]
fn test_join_with_unknown_place_in_known_category() {
    let env = create_test_environment(Box::new(AlwaysAdvance));
    assert!(matches!(
        env.engine.join(PHONE, "b9", "banks"),
        Err(AppError::PlaceNotFound)
    ));
}

#[test]
fn test_users_do_not_share_queue_state() {
    let env = create_test_environment(Box::new(AlwaysAdvance));

    env.engine.join("5551234567", "g1", "government").unwrap();
    env.engine.join("5559876543", "g2", "government").unwrap();
    env.engine.leave("5551234567");

    assert!(env.engine.current("5551234567").is_none());
    assert_eq!(env.engine.current("5559876543").unwrap().place_id, "g2");
    assert!(env.engine.history("5559876543").is_empty());
}

// =============================================================================
// Stochastic movement tests
// =============================================================================

#[test]
fn test_decrement_rate_converges_to_configured_probability() {
    let env = create_test_environment(Box::new(RandomSampler::new(0.7)));

    // Each trial: fresh join (overwrites), one poll, observe movement.
    let trials = 20_000;
    let mut moved = 0;
    for _ in 0..trials {
        let before = env.engine.join(PHONE, "1", "restaurants").unwrap().position;
        let after = env.engine.update_position(PHONE).unwrap().position;
        assert!(after == before || after == before - 1);
        if after < before {
            moved += 1;
        }
    }

    let rate = f64::from(moved) / f64::from(trials);
    // ~9 standard deviations of slack at 20k trials
    assert!((rate - 0.7).abs() < 0.03, "observed rate {rate}");
}
