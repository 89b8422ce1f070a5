//! Chat room repository backed by the hierarchical store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use common::DbResult;
use domain::{
    ChatRoomObject, FIELD_CHAT_ROOM_ID, FIELD_FRIEND_USER_ID, FIELD_FRIEND_USER_NAME,
    FIELD_LAST_MESSAGE,
};

use super::codec;
use super::paths::{chat_room_field_path, chat_room_path, chat_rooms_path};
use crate::store::StoreClient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Chat room repository trait for dependency injection.
///
/// Every operation issues exactly one store request. A missing value is never
/// an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ChatRoomRepository: Send + Sync {
    /// Find the owner's record for a friend
    async fn get_chat_room(&self, owner_id: &str, friend_id: &str)
        -> DbResult<Option<ChatRoomObject>>;

    /// Store a record under the owner only (the friend creates its own)
    async fn add_chat_room(&self, room: &ChatRoomObject, owner_id: &str) -> DbResult<()>;

    /// List all of the owner's records (order not significant)
    async fn load_chat_rooms(&self, owner_id: &str) -> DbResult<Vec<ChatRoomObject>>;

    /// Set the last message on both sides and refresh the friend's mirror
    async fn update_chat_room_last_message(
        &self,
        chat_room_id: &str,
        owner_id: &str,
        owner_name: &str,
        friend_id: &str,
        last_message: &str,
    ) -> DbResult<()>;
}

/// Concrete implementation of ChatRoomRepository over a `StoreClient`
pub struct ChatRoomStore {
    store: Arc<dyn StoreClient>,
}

impl ChatRoomStore {
    /// Create new repository instance
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChatRoomRepository for ChatRoomStore {
    async fn get_chat_room(
        &self,
        owner_id: &str,
        friend_id: &str,
    ) -> DbResult<Option<ChatRoomObject>> {
        let path = chat_room_path(owner_id, friend_id)?;
        let value = self.store.get(&path).await?;
        debug!(%path, found = value.is_some(), "loaded chat room");

        value.map(codec::decode).transpose()
    }

    async fn add_chat_room(&self, room: &ChatRoomObject, owner_id: &str) -> DbResult<()> {
        let path = chat_room_path(owner_id, &room.friend_user_id)?;
        let value = codec::encode(room)?;

        self.store.set(&path, value).await?;
        debug!(%path, "stored chat room");
        Ok(())
    }

    async fn load_chat_rooms(&self, owner_id: &str) -> DbResult<Vec<ChatRoomObject>> {
        let path = chat_rooms_path(owner_id)?;
        let rooms = match self.store.get(&path).await? {
            Some(value) => codec::decode_collection(&path, value)?,
            None => Vec::new(),
        };

        debug!(%path, count = rooms.len(), "loaded chat rooms");
        Ok(rooms)
    }

    async fn update_chat_room_last_message(
        &self,
        chat_room_id: &str,
        owner_id: &str,
        owner_name: &str,
        friend_id: &str,
        last_message: &str,
    ) -> DbResult<()> {
        let values =
            last_message_update(chat_room_id, owner_id, owner_name, friend_id, last_message)?;

        self.store.update(values).await?;
        debug!(owner_id, friend_id, "updated last message");
        Ok(())
    }
}

/// The five writes of a last-message update, keyed by absolute path.
fn last_message_update(
    chat_room_id: &str,
    owner_id: &str,
    owner_name: &str,
    friend_id: &str,
    last_message: &str,
) -> DbResult<Map<String, Value>> {
    let mirror = |field: &str| chat_room_field_path(friend_id, owner_id, field);

    let writes = [
        (
            chat_room_field_path(owner_id, friend_id, FIELD_LAST_MESSAGE)?,
            last_message,
        ),
        (mirror(FIELD_LAST_MESSAGE)?, last_message),
        (mirror(FIELD_CHAT_ROOM_ID)?, chat_room_id),
        (mirror(FIELD_FRIEND_USER_NAME)?, owner_name),
        (mirror(FIELD_FRIEND_USER_ID)?, owner_id),
    ];

    Ok(writes
        .into_iter()
        .map(|(path, value)| (path, Value::String(value.to_string())))
        .collect())
}
