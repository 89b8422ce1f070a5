//! Chat room service - Handles chat room use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::DbResult;
use domain::{ChatPartner, ChatRoomObject};

use crate::repository::ChatRoomRepository;

/// Chat room service trait for dependency injection.
#[async_trait]
pub trait ChatRoomService: Send + Sync {
    /// Get the owner's room with a friend, creating the owner's record if needed
    async fn open_chat_room(&self, my_user_id: &str, friend: ChatPartner)
        -> DbResult<ChatRoomObject>;

    /// List the owner's rooms ordered by friend name
    async fn chat_rooms(&self, my_user_id: &str) -> DbResult<Vec<ChatRoomObject>>;

    /// Record a sent message as the room's last message on both sides
    async fn send_last_message(
        &self,
        room: &ChatRoomObject,
        my_user_id: &str,
        my_user_name: &str,
        message: &str,
    ) -> DbResult<()>;
}

/// Concrete implementation of ChatRoomService using repository.
pub struct ChatRoomManager {
    repo: Arc<dyn ChatRoomRepository>,
}

impl ChatRoomManager {
    /// Create new chat room service instance with repository
    pub fn new(repo: Arc<dyn ChatRoomRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ChatRoomService for ChatRoomManager {
    async fn open_chat_room(
        &self,
        my_user_id: &str,
        friend: ChatPartner,
    ) -> DbResult<ChatRoomObject> {
        if let Some(room) = self.repo.get_chat_room(my_user_id, &friend.id).await? {
            return Ok(room);
        }

        // Only our side is created; the friend's record appears with the
        // first message or when they open the room themselves.
        let room = ChatRoomObject::start(&friend);
        self.repo.add_chat_room(&room, my_user_id).await?;
        info!(
            chat_room_id = %room.chat_room_id,
            my_user_id,
            friend_user_id = %friend.id,
            "created chat room"
        );

        Ok(room)
    }

    async fn chat_rooms(&self, my_user_id: &str) -> DbResult<Vec<ChatRoomObject>> {
        let mut rooms = self.repo.load_chat_rooms(my_user_id).await?;
        rooms.sort_by(|a, b| {
            a.friend_user_name
                .cmp(&b.friend_user_name)
                .then_with(|| a.friend_user_id.cmp(&b.friend_user_id))
        });
        Ok(rooms)
    }

    async fn send_last_message(
        &self,
        room: &ChatRoomObject,
        my_user_id: &str,
        my_user_name: &str,
        message: &str,
    ) -> DbResult<()> {
        self.repo
            .update_chat_room_last_message(
                &room.chat_room_id,
                my_user_id,
                my_user_name,
                &room.friend_user_id,
                message,
            )
            .await
    }
}
