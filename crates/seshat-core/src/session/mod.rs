//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the metadata projection returned by listings
//!   (`SessionMetadata`)
//! - `store`: the session store itself (`SessionStore`), composing the
//!   content hasher, the friendly alias source, and the hash store
//!
//! # Usage
//!
//! ```ignore
//! use seshat_core::session::{SessionMetadata, SessionStore};
//! ```

mod model;
mod store;

// Re-export public API
pub use model::SessionMetadata;
pub use store::{SessionStore, DEFAULT_MAX_ALIAS_RETRIES};
