//! Store path layout for chat rooms.
//!
//! User ids become single path segments, so each one is checked before a
//! path is built: an empty id or one containing `/` would address a
//! different node.

use common::{DbError, DbResult};
use domain::{is_valid_key, DB_KEY_CHAT_ROOMS};

fn key(id: &str) -> DbResult<&str> {
    if is_valid_key(id) {
        Ok(id)
    } else {
        Err(DbError::invalid_key(id))
    }
}

/// `ChatRooms/{owner}`
pub fn chat_rooms_path(owner_id: &str) -> DbResult<String> {
    Ok(format!("{}/{}", DB_KEY_CHAT_ROOMS, key(owner_id)?))
}

/// `ChatRooms/{owner}/{friend}`
pub fn chat_room_path(owner_id: &str, friend_id: &str) -> DbResult<String> {
    Ok(format!(
        "{}/{}/{}",
        DB_KEY_CHAT_ROOMS,
        key(owner_id)?,
        key(friend_id)?
    ))
}

/// `ChatRooms/{owner}/{friend}/{field}`
pub fn chat_room_field_path(owner_id: &str, friend_id: &str, field: &str) -> DbResult<String> {
    Ok(format!("{}/{}", chat_room_path(owner_id, friend_id)?, field))
}
