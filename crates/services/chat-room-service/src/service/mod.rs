//! Service layer - chat room use cases.

mod chat_room_service;

pub use chat_room_service::{ChatRoomManager, ChatRoomService};
