//! Domain-level constants.
//!
//! These constants define the key layout of the hierarchical store.

// =============================================================================
// Store Keys
// =============================================================================

/// Root key holding every owner's chat rooms (`ChatRooms/{owner}/{friend}`)
pub const DB_KEY_CHAT_ROOMS: &str = "ChatRooms";

/// Path separator used by the store
pub const PATH_SEPARATOR: char = '/';

/// Characters the store does not allow inside a single key
pub const INVALID_KEY_CHARS: &[char] = &[PATH_SEPARATOR, '.', '#', '$', '[', ']'];

/// Check if a user id can be used as one path segment
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(INVALID_KEY_CHARS)
}

// =============================================================================
// Chat Room Fields
// =============================================================================

pub const FIELD_CHAT_ROOM_ID: &str = "chatRoomId";
pub const FIELD_FRIEND_USER_ID: &str = "friendUserId";
pub const FIELD_FRIEND_USER_NAME: &str = "friendUserName";
pub const FIELD_LAST_MESSAGE: &str = "lastMessage";
