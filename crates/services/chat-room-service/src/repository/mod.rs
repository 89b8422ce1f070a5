//! Repository layer for data access.

mod chat_room_repository;
pub mod codec;
pub mod paths;

#[cfg(any(test, feature = "test-utils"))]
pub use chat_room_repository::MockChatRoomRepository;
pub use chat_room_repository::{ChatRoomRepository, ChatRoomStore};
