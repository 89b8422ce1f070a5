//! Chat Room Service Library
//!
//! Data-access layer for chat rooms kept in a remote hierarchical key-value
//! store, plus the use cases the chat screens build on.

pub mod config;
pub mod repository;
pub mod service;
pub mod store;

use std::sync::Arc;

use crate::repository::ChatRoomStore;
use crate::service::ChatRoomManager;
use crate::store::StoreClient;

/// Wire a repository and service over the given store client.
pub fn build(store: Arc<dyn StoreClient>) -> (Arc<ChatRoomStore>, ChatRoomManager) {
    let repo = Arc::new(ChatRoomStore::new(store));
    let service = ChatRoomManager::new(repo.clone());
    (repo, service)
}
