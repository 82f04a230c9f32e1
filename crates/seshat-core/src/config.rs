//! Store configuration and key namespacing.
//!
//! All durable session state lives in six hashes of the backing store, one
//! per field, namespaced per application:
//!
//! ```text
//! {save_prefix}:{app_name}:sessions:time      # id -> last write time (RFC 3339)
//! {save_prefix}:{app_name}:sessions:data      # id -> serialized snapshot
//! {save_prefix}:{app_name}:sessions:hash      # id -> content fingerprint
//! {save_prefix}:{app_name}:sessions:label     # id -> user label
//! {save_prefix}:{app_name}:sessions:friendly  # friendly alias -> id
//! {save_prefix}:{app_name}:sessions:machine   # id -> friendly alias
//! ```
//!
//! Distinct `app_name` values partition entirely separate session spaces,
//! so several applications can share one store deployment.

use serde::{Deserialize, Serialize};

fn default_save_prefix() -> String {
    "seshat".to_string()
}

/// Configuration for one application's session space.
///
/// This struct only carries the values; loading them from a file or the
/// environment is the embedding application's job.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StoreConfig {
    /// Global key prefix shared by every application on the same store.
    #[serde(default = "default_save_prefix")]
    pub save_prefix: String,
    /// Application name. Distinct names never see each other's sessions.
    pub app_name: String,
}

impl StoreConfig {
    /// Creates a config with the default save prefix.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            save_prefix: default_save_prefix(),
            app_name: app_name.into(),
        }
    }
}

/// Precomputed hash keys for one application's session space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    /// id -> last write time
    pub time: String,
    /// id -> serialized snapshot
    pub data: String,
    /// id -> content fingerprint
    pub hash: String,
    /// id -> user label
    pub label: String,
    /// friendly alias -> id (reverse mapping, write-once per alias)
    pub friendly: String,
    /// id -> friendly alias (forward mapping)
    pub machine: String,
}

impl SessionKeys {
    /// Derives the six session keys from a config.
    pub fn new(config: &StoreConfig) -> Self {
        let key = |field: &str| {
            format!(
                "{}:{}:sessions:{}",
                config.save_prefix, config.app_name, field
            )
        };
        Self {
            time: key("time"),
            data: key("data"),
            hash: key("hash"),
            label: key("label"),
            friendly: key("friendly"),
            machine: key("machine"),
        }
    }
}
