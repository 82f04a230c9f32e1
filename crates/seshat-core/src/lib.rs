//! seshat-core: durable session snapshots over a hash-field store.
//!
//! The store upserts opaque session payloads into a remote hash-based
//! key-value backend, collapses identical snapshots when listing many
//! sessions, and issues collision-safe human-readable aliases for
//! machine-generated session ids.
//!
//! # Module Structure
//!
//! - `config`: store configuration and key namespacing
//! - `error`: shared error type and `Result` alias
//! - `fingerprint`: content fingerprint used as the dedup key
//! - `friendly`: friendly alias generation and canonicalization
//! - `kv`: the `HashStore` capability the backend must provide
//! - `memory`: in-memory `HashStore` for tests and local development
//! - `session`: the session store and its metadata projection
//!
//! Production deployments pair this crate with a backend adapter such as
//! `seshat-redis`.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod friendly;
pub mod kv;
pub mod memory;
pub mod session;

// Re-export common types
pub use config::{SessionKeys, StoreConfig};
pub use error::{Result, StoreError};
pub use fingerprint::fingerprint;
pub use friendly::{canonicalize, FriendlyIdSource, WordPairGenerator};
pub use kv::{FieldWrite, HashStore};
pub use memory::InMemoryHashStore;
pub use session::{SessionMetadata, SessionStore, DEFAULT_MAX_ALIAS_RETRIES};
