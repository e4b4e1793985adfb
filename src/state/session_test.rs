use super::*;
use crate::util::storage::MemoryStore;

fn sample_user() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: Some("Alice".to_owned()),
    }
}

// =============================================================
// SessionState constructors
// =============================================================

#[test]
fn restoring_state_is_unauthenticated_and_loading() {
    let state = SessionState::restoring();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert!(state.loading);
}

#[test]
fn signed_in_state_holds_user_and_flag() {
    let state = SessionState::signed_in(sample_user());
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user.unwrap().id, "u-1");
}

#[test]
fn signed_out_state_is_empty() {
    let state = SessionState::signed_out();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert!(!state.loading);
}

// =============================================================
// commit / restore round trip
// =============================================================

#[test]
fn commit_then_restore_round_trips() {
    let store = MemoryStore::new();
    commit(&store, &sample_user());

    // Simulates a reload: a fresh restore pass over the same entries.
    let restored = restore(&store).expect("session should restore");
    assert_eq!(restored, sample_user());
    assert_eq!(store.get(LOGIN_FLAG_KEY).as_deref(), Some("true"));
}

#[test]
fn restore_on_empty_store_reports_no_session() {
    let store = MemoryStore::new();
    assert!(restore(&store).is_none());
    assert_eq!(store.len(), 0);
}

// =============================================================
// Defensive clearing of corrupt / torn state
// =============================================================

#[test]
fn restore_clears_unparsable_profile() {
    let store = MemoryStore::new();
    store.set(LOGIN_FLAG_KEY, "true");
    store.set(USER_KEY, "{not json");
    store.set(TOKEN_KEY, "tok-1");

    assert!(restore(&store).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
    assert!(store.get(TOKEN_KEY).is_none());
}

#[test]
fn restore_clears_flag_without_profile() {
    let store = MemoryStore::new();
    store.set(LOGIN_FLAG_KEY, "true");

    assert!(restore(&store).is_none());
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

#[test]
fn restore_clears_profile_without_flag() {
    let store = MemoryStore::new();
    store.set(USER_KEY, r#"{"id":"u-1","email":"alice@example.com"}"#);

    assert!(restore(&store).is_none());
    assert!(store.get(USER_KEY).is_none());
}

#[test]
fn restore_treats_non_true_flag_as_corrupt() {
    let store = MemoryStore::new();
    store.set(LOGIN_FLAG_KEY, "yes");
    store.set(USER_KEY, r#"{"id":"u-1","email":"alice@example.com"}"#);

    assert!(restore(&store).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert!(store.get(LOGIN_FLAG_KEY).is_none());
}

#[test]
fn restore_parses_profile_with_backend_extras() {
    let store = MemoryStore::new();
    store.set(LOGIN_FLAG_KEY, "true");
    store.set(USER_KEY, r#"{"id":7,"email":"alice@example.com","plan":"pro"}"#);

    let restored = restore(&store).expect("tolerant parse should succeed");
    assert_eq!(restored.id, "7");
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_all_three_entries() {
    let store = MemoryStore::new();
    store_token(&store, "tok-1");
    commit(&store, &sample_user());

    clear(&store);
    assert_eq!(store.len(), 0);
}

#[test]
fn clear_is_idempotent_on_empty_store() {
    let store = MemoryStore::new();
    clear(&store);
    clear(&store);
    assert_eq!(store.len(), 0);
}

// =============================================================
// token entry
// =============================================================

#[test]
fn store_token_round_trips() {
    let store = MemoryStore::new();
    assert!(stored_token(&store).is_none());

    store_token(&store, "tok-1");
    assert_eq!(stored_token(&store).as_deref(), Some("tok-1"));
}
