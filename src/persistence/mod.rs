//! Persistence for the region set.
//!
//! ## Modules
//!
//! - `codec` - region snapshot <-> JSON text (current and legacy schemas)
//! - `store` - key-value string stores (in-memory and file-backed)
//! - `error` - error types for both

pub mod codec;
pub mod error;
pub mod store;

pub use error::{ParseError, PersistenceError, PersistenceResult, StoreError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
