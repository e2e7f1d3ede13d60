//! Ladle Storage - Persistence backends for the recipe manager
//!
//! This crate provides the `RecipeStore` gateway trait plus a SQLite
//! backend for the binary and an in-memory backend for tests.

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::RecipeStore;
