//! Common utilities shared across the chat services.
//!
//! This crate provides:
//! - The store and repository error taxonomy
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{DbError, DbResult, StoreError, StoreResult};
