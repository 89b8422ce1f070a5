//! Chat room repository tests against the in-memory store.

use std::sync::Arc;

use serde_json::json;

use chat_room_service_lib::repository::{ChatRoomRepository, ChatRoomStore};
use chat_room_service_lib::store::{MemoryStore, StoreClient};
use common::{DbError, StoreError};
use domain::ChatRoomObject;

fn setup(root: serde_json::Value) -> (Arc<MemoryStore>, ChatRoomStore) {
    let store = Arc::new(MemoryStore::with_root(root));
    let repo = ChatRoomStore::new(store.clone());
    (store, repo)
}

fn bob_room() -> ChatRoomObject {
    ChatRoomObject::new("room-1", "bob", "Bob")
}

#[tokio::test]
async fn test_get_missing_room_is_none() {
    let (_, repo) = setup(json!(null));

    let room = repo.get_chat_room("alice", "bob").await.unwrap();

    assert_eq!(room, None);
}

#[tokio::test]
async fn test_add_then_get_returns_same_room() {
    let (_, repo) = setup(json!(null));
    let room = bob_room().with_last_message("see you");

    repo.add_chat_room(&room, "alice").await.unwrap();
    let found = repo.get_chat_room("alice", "bob").await.unwrap();

    assert_eq!(found, Some(room));
}

#[tokio::test]
async fn test_add_does_not_create_friend_side() {
    let (store, repo) = setup(json!(null));

    repo.add_chat_room(&bob_room(), "alice").await.unwrap();

    assert_eq!(repo.get_chat_room("bob", "alice").await.unwrap(), None);
    assert_eq!(store.get("ChatRooms/bob").await.unwrap(), None);
    assert_eq!(
        store.snapshot().await,
        json!({"ChatRooms": {"alice": {"bob": {
            "chatRoomId": "room-1",
            "friendUserId": "bob",
            "friendUserName": "Bob",
        }}}})
    );
}

#[tokio::test]
async fn test_add_replaces_existing_room() {
    let (_, repo) = setup(json!(null));
    repo.add_chat_room(&bob_room().with_last_message("old"), "alice")
        .await
        .unwrap();

    let replacement = ChatRoomObject::new("room-9", "bob", "Bobby");
    repo.add_chat_room(&replacement, "alice").await.unwrap();

    assert_eq!(
        repo.get_chat_room("alice", "bob").await.unwrap(),
        Some(replacement)
    );
}

#[tokio::test]
async fn test_get_malformed_room_is_decoding_error() {
    let (_, repo) = setup(json!({"ChatRooms": {"alice": {"bob": {"chatRoomId": 12}}}}));

    let result = repo.get_chat_room("alice", "bob").await;

    assert!(matches!(result, Err(DbError::Decoding(_))));
}

#[tokio::test]
async fn test_load_missing_owner_is_empty() {
    let (_, repo) = setup(json!({"ChatRooms": {"bob": {"alice": {
        "chatRoomId": "room-1",
        "friendUserId": "alice",
        "friendUserName": "Alice",
    }}}}));

    let rooms = repo.load_chat_rooms("alice").await.unwrap();

    assert!(rooms.is_empty());
}

#[tokio::test]
async fn test_load_returns_every_room() {
    let (_, repo) = setup(json!(null));
    let carol = ChatRoomObject::new("room-2", "carol", "Carol").with_last_message("hey");
    repo.add_chat_room(&bob_room(), "alice").await.unwrap();
    repo.add_chat_room(&carol, "alice").await.unwrap();

    let mut rooms = repo.load_chat_rooms("alice").await.unwrap();
    rooms.sort_by(|a, b| a.chat_room_id.cmp(&b.chat_room_id));

    assert_eq!(rooms, vec![bob_room(), carol]);
}

#[tokio::test]
async fn test_load_scalar_is_validation_error() {
    let (_, repo) = setup(json!({"ChatRooms": {"alice": "not rooms"}}));

    let result = repo.load_chat_rooms("alice").await;

    assert!(matches!(
        result,
        Err(DbError::Validation { ref path }) if path == "ChatRooms/alice"
    ));
}

#[tokio::test]
async fn test_load_mixed_members_is_validation_error() {
    let (_, repo) = setup(json!({"ChatRooms": {"alice": {
        "bob": {"chatRoomId": "room-1", "friendUserId": "bob", "friendUserName": "Bob"},
        "carol": 7,
    }}}));

    let result = repo.load_chat_rooms("alice").await;

    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test]
async fn test_load_bad_record_is_decoding_error() {
    let (_, repo) = setup(json!({"ChatRooms": {"alice": {"bob": {"friendUserId": "bob"}}}}));

    let result = repo.load_chat_rooms("alice").await;

    assert!(matches!(result, Err(DbError::Decoding(_))));
}

#[tokio::test]
async fn test_update_last_message_mirrors_both_sides() {
    let (store, repo) = setup(json!(null));
    repo.add_chat_room(&bob_room(), "alice").await.unwrap();

    repo.update_chat_room_last_message("room-1", "alice", "Alice", "bob", "hi")
        .await
        .unwrap();

    assert_eq!(
        store.get("ChatRooms/alice/bob/lastMessage").await.unwrap(),
        Some(json!("hi"))
    );
    assert_eq!(
        store.get("ChatRooms/bob/alice").await.unwrap(),
        Some(json!({
            "lastMessage": "hi",
            "chatRoomId": "room-1",
            "friendUserName": "Alice",
            "friendUserId": "alice",
        }))
    );

    // Both sides now decode as complete records.
    assert_eq!(
        repo.get_chat_room("alice", "bob").await.unwrap(),
        Some(bob_room().with_last_message("hi"))
    );
    assert_eq!(
        repo.get_chat_room("bob", "alice").await.unwrap(),
        Some(ChatRoomObject::new("room-1", "alice", "Alice").with_last_message("hi"))
    );
}

#[tokio::test]
async fn test_update_keeps_other_owner_fields() {
    let (store, repo) = setup(json!(null));
    repo.add_chat_room(&bob_room().with_last_message("first"), "alice")
        .await
        .unwrap();

    repo.update_chat_room_last_message("room-1", "alice", "Alice", "bob", "second")
        .await
        .unwrap();

    assert_eq!(
        store.get("ChatRooms/alice/bob").await.unwrap(),
        Some(json!({
            "chatRoomId": "room-1",
            "friendUserId": "bob",
            "friendUserName": "Bob",
            "lastMessage": "second",
        }))
    );
}

#[tokio::test]
async fn test_offline_store_reports_transport_errors() {
    let (store, repo) = setup(json!({"ChatRooms": {"alice": "would fail validation"}}));
    store.set_offline(true);

    assert!(matches!(
        repo.get_chat_room("alice", "bob").await,
        Err(DbError::Transport(StoreError::Unavailable(_)))
    ));
    assert!(matches!(
        repo.add_chat_room(&bob_room(), "alice").await,
        Err(DbError::Transport(_))
    ));
    assert!(matches!(
        repo.load_chat_rooms("alice").await,
        Err(DbError::Transport(_))
    ));
    assert!(matches!(
        repo.update_chat_room_last_message("room-1", "alice", "Alice", "bob", "hi")
            .await,
        Err(DbError::Transport(_))
    ));

    // Nothing was written while offline.
    store.set_offline(false);
    assert_eq!(
        store.snapshot().await,
        json!({"ChatRooms": {"alice": "would fail validation"}})
    );
}

#[tokio::test]
async fn test_concurrent_updates_are_independent() {
    let (store, repo) = setup(json!(null));
    let repo = Arc::new(repo);

    let friends = ["bob", "carol", "dave"];
    let calls = friends.iter().map(|friend| {
        let repo = repo.clone();
        async move {
            repo.update_chat_room_last_message("room", "alice", "Alice", friend, friend)
                .await
        }
    });
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    for friend in friends {
        assert_eq!(
            store
                .get(&format!("ChatRooms/alice/{}/lastMessage", friend))
                .await
                .unwrap(),
            Some(json!(friend))
        );
    }
}

#[tokio::test]
async fn test_empty_friend_id_keeps_owner_rooms() {
    let (store, repo) = setup(json!(null));
    let carol = ChatRoomObject::new("room-2", "carol", "Carol");
    repo.add_chat_room(&bob_room(), "alice").await.unwrap();
    repo.add_chat_room(&carol, "alice").await.unwrap();
    let before = store.snapshot().await;

    let result = repo
        .add_chat_room(&ChatRoomObject::new("room-3", "", "Nobody"), "alice")
        .await;

    assert!(matches!(result, Err(DbError::InvalidKey { ref key }) if key.is_empty()));
    assert_eq!(store.snapshot().await, before);

    let mut rooms = repo.load_chat_rooms("alice").await.unwrap();
    rooms.sort_by(|a, b| a.chat_room_id.cmp(&b.chat_room_id));
    assert_eq!(rooms, vec![bob_room(), carol]);
}

#[tokio::test]
async fn test_nested_friend_id_is_rejected_on_update() {
    let (store, repo) = setup(json!(null));
    repo.add_chat_room(&bob_room(), "alice").await.unwrap();
    let before = store.snapshot().await;

    let result = repo
        .update_chat_room_last_message("room-1", "alice", "Alice", "bob/lastMessage", "hi")
        .await;

    assert!(matches!(result, Err(DbError::InvalidKey { .. })));
    assert_eq!(store.snapshot().await, before);
}
