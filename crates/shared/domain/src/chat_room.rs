//! Chat room domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One owner's view of a conversation with one friend.
///
/// Stored at `ChatRooms/{owner}/{friend_user_id}`. The counterpart keeps its
/// own mirrored record under its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChatRoomObject {
    /// Identifier of the underlying conversation thread
    pub chat_room_id: String,
    /// Counterpart user's identifier
    pub friend_user_id: String,
    /// Counterpart user's display name
    pub friend_user_name: String,
    /// Most recent message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
}

impl ChatRoomObject {
    /// Create a chat room record with no message yet
    pub fn new(
        chat_room_id: impl Into<String>,
        friend_user_id: impl Into<String>,
        friend_user_name: impl Into<String>,
    ) -> Self {
        Self {
            chat_room_id: chat_room_id.into(),
            friend_user_id: friend_user_id.into(),
            friend_user_name: friend_user_name.into(),
            last_message: None,
        }
    }

    /// Create a record for a brand new conversation with a freshly minted id
    pub fn start(friend: &ChatPartner) -> Self {
        Self::new(new_chat_room_id(), friend.id.clone(), friend.name.clone())
    }

    /// Set the last message
    pub fn with_last_message(mut self, message: impl Into<String>) -> Self {
        self.last_message = Some(message.into());
        self
    }
}

/// The other participant of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPartner {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl ChatPartner {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Mint a new chat room identifier
pub fn new_chat_room_id() -> String {
    Uuid::new_v4().to_string()
}
