use super::*;

fn record(username: &str, hash: &str) -> UserRecord {
    UserRecord { username: username.to_owned(), hashed_password: hash.to_owned() }
}

#[tokio::test]
async fn insert_then_find_returns_record() {
    let store = MemoryUserStore::new();
    store.insert_user(record("alice", "h1")).await.unwrap();
    assert_eq!(store.find_user("alice").await.unwrap(), Some(record("alice", "h1")));
}

#[tokio::test]
async fn find_unknown_user_is_none() {
    let store = MemoryUserStore::new();
    assert_eq!(store.find_user("nobody").await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_insert_is_rejected_and_keeps_original() {
    let store = MemoryUserStore::new();
    store.insert_user(record("alice", "h1")).await.unwrap();
    let err = store.insert_user(record("alice", "h2")).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(ref name) if name == "alice"));
    assert_eq!(store.find_user("alice").await.unwrap(), Some(record("alice", "h1")));
    assert_eq!(store.user_count().await, 1);
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let store = MemoryUserStore::new();
    store.insert_user(record("Alice", "h1")).await.unwrap();
    store.insert_user(record("alice", "h2")).await.unwrap();
    assert_eq!(store.user_count().await, 2);
}

#[test]
fn kind_is_memory() {
    assert_eq!(MemoryUserStore::new().kind(), "memory");
}
