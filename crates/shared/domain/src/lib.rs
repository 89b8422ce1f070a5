//! Domain layer - Core chat entities and store key layout.
//!
//! This crate contains pure domain types with no infrastructure dependencies.

pub mod chat_room;
pub mod constants;

pub use chat_room::{new_chat_room_id, ChatPartner, ChatRoomObject};
pub use constants::*;
