//! Hash-field key-value store capability.
//!
//! Defines the contract the session store requires from its storage
//! backend, decoupling the core logic from the concrete client (Redis in
//! production, an in-memory map in tests and local development).

use crate::error::Result;
use async_trait::async_trait;

/// A single field write destined for [`HashStore::batch_set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    pub key: String,
    pub field: String,
    pub value: String,
}

impl FieldWrite {
    /// Creates a field write.
    pub fn new(
        key: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// An abstract hash-field store.
///
/// Implementations must be safe to share across tasks; every method is an
/// independent asynchronous round trip with no coordination beyond what
/// the store itself provides.
///
/// # Implementation Notes
///
/// Two methods carry atomicity obligations:
/// - [`field_set_if_absent`](HashStore::field_set_if_absent) must be a
///   single compare-and-set; it is the primitive that resolves alias-claim
///   races.
/// - [`batch_set`](HashStore::batch_set) must apply all writes as one
///   unit, so no reader observes a partially-updated group of fields.
#[async_trait]
pub trait HashStore: Send + Sync {
    /// Sets a single field.
    async fn field_set(&self, key: &str, field: &str, value: &str) -> Result<()>;

    /// Gets a single field.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: field present
    /// - `Ok(None)`: field unset
    /// - `Err(_)`: storage failure
    async fn field_get(&self, key: &str, field: &str) -> Result<Option<String>>;

    /// Gets many fields in one round trip.
    ///
    /// The result preserves the order of `fields`, with `None` per missing
    /// entry, so callers can zip it back against their input.
    async fn field_multi_get(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>>;

    /// Sets a field only if it is currently unset.
    ///
    /// Atomic with respect to concurrent callers: of two racers, exactly
    /// one observes `true`.
    async fn field_set_if_absent(&self, key: &str, field: &str, value: &str) -> Result<bool>;

    /// Applies all writes as a single unit.
    ///
    /// Readers observe either none of the writes or all of them.
    async fn batch_set(&self, writes: &[FieldWrite]) -> Result<()>;
}
