//! Redis backend for the seshat session store.
//!
//! Implements the `HashStore` capability from `seshat-core` over a
//! multiplexed async Redis connection:
//!
//! ```ignore
//! use seshat_core::{SessionStore, StoreConfig, WordPairGenerator};
//! use seshat_redis::RedisHashStore;
//! use std::sync::Arc;
//!
//! let backend = Arc::new(RedisHashStore::connect("redis://127.0.0.1:6379").await?);
//! let store = SessionStore::new(
//!     &StoreConfig::new("myapp"),
//!     backend,
//!     Arc::new(WordPairGenerator::new()),
//! )?;
//! ```

mod store;

pub use crate::store::RedisHashStore;
