//! Session store.
//!
//! Composes the content hasher, the friendly alias source, and the hash
//! store into the durable session API: upsert, labeling, deduplicated
//! listing, and alias issuance/resolution. All durable state changes go
//! through the injected [`HashStore`]; there is no in-process locking.

use super::model::SessionMetadata;
use crate::config::{SessionKeys, StoreConfig};
use crate::error::{Result, StoreError};
use crate::fingerprint::fingerprint;
use crate::friendly::{canonicalize, FriendlyIdSource};
use crate::kv::{FieldWrite, HashStore};
use chrono::{SecondsFormat, Utc};
use futures::future::{join_all, try_join_all};
use std::collections::HashMap;
use std::sync::Arc;

/// Default bound on alias-claim attempts before falling back to the
/// machine id itself.
pub const DEFAULT_MAX_ALIAS_RETRIES: usize = 10;

/// Durable store for opaque session snapshots.
///
/// Each session is an upserted record: an immutable machine id pointing at
/// a mutable payload, its last write time, a content fingerprint, an
/// optional user label, and an optional friendly alias. The store never
/// deletes or expires sessions.
pub struct SessionStore {
    store: Arc<dyn HashStore>,
    namer: Arc<dyn FriendlyIdSource>,
    keys: SessionKeys,
}

impl SessionStore {
    /// Creates a session store over the given backend and alias source.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `app_name` is empty, since an
    /// empty name would collapse the per-application key partitioning.
    pub fn new(
        config: &StoreConfig,
        store: Arc<dyn HashStore>,
        namer: Arc<dyn FriendlyIdSource>,
    ) -> Result<Self> {
        if config.app_name.is_empty() {
            return Err(StoreError::config("app_name must not be empty"));
        }
        let keys = SessionKeys::new(config);
        tracing::debug!(time_key = %keys.time, "session store initialized");
        Ok(Self { store, namer, keys })
    }

    /// Upserts a session snapshot.
    ///
    /// Writes the payload, its fingerprint, and the current time as one
    /// atomic batch, so no concurrent reader observes a partially-updated
    /// record. The first `save` for an id creates the session; later calls
    /// overwrite it.
    pub async fn save(&self, id: &str, data: &str) -> Result<()> {
        let hash = fingerprint(data);
        let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let writes = [
            FieldWrite::new(&self.keys.time, id, time),
            FieldWrite::new(&self.keys.data, id, data),
            FieldWrite::new(&self.keys.hash, id, hash),
        ];
        self.store.batch_set(&writes).await
    }

    /// Sets the user label for a session.
    ///
    /// Independent of [`save`](Self::save): the session need not exist yet,
    /// and labels carry no uniqueness constraint.
    pub async fn label(&self, id: &str, label: &str) -> Result<()> {
        self.store.field_set(&self.keys.label, id, label).await
    }

    /// Returns the raw payload for a session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(data))`: session exists
    /// - `Ok(None)`: unknown id
    /// - `Err(_)`: storage failure
    pub async fn get(&self, id: &str) -> Result<Option<String>> {
        self.store.field_get(&self.keys.data, id).await
    }

    /// Returns the machine id registered under a friendly alias.
    pub async fn resolve_friendly_id(&self, friendly_id: &str) -> Result<Option<String>> {
        self.store.field_get(&self.keys.friendly, friendly_id).await
    }

    /// Returns the friendly alias for a session, issuing one if needed.
    ///
    /// Uses [`DEFAULT_MAX_ALIAS_RETRIES`] as the claim bound; see
    /// [`ensure_friendly_id_with_retries`](Self::ensure_friendly_id_with_retries).
    pub async fn ensure_friendly_id(&self, id: &str) -> Result<String> {
        self.ensure_friendly_id_with_retries(id, DEFAULT_MAX_ALIAS_RETRIES)
            .await
    }

    /// Returns the friendly alias for a session, issuing one if needed.
    ///
    /// Idempotent: once an alias is assigned it is never revoked or
    /// changed, and repeat calls return it without writing. Otherwise up to
    /// `max_retries` candidates are claimed via atomic insert-if-absent on
    /// the reverse mapping; of two callers racing for one candidate,
    /// exactly one wins. If every candidate is already claimed, the machine
    /// id becomes its own alias, so the operation always terminates with a
    /// usable value and never fails for collision reasons.
    pub async fn ensure_friendly_id_with_retries(
        &self,
        id: &str,
        max_retries: usize,
    ) -> Result<String> {
        if let Some(existing) = self.store.field_get(&self.keys.machine, id).await? {
            tracing::debug!(id, friendly = %existing, "friendly id already assigned");
            return Ok(existing);
        }

        for _ in 0..max_retries {
            let candidate = canonicalize(&self.namer.generate());
            if self
                .store
                .field_set_if_absent(&self.keys.friendly, &candidate, id)
                .await?
            {
                self.store
                    .field_set(&self.keys.machine, id, &candidate)
                    .await?;
                tracing::debug!(id, friendly = %candidate, "claimed friendly id");
                return Ok(candidate);
            }
        }

        // Every candidate collided; the id becomes its own alias.
        tracing::warn!(id, "alias candidates exhausted, using machine id");
        self.store.field_set(&self.keys.friendly, id, id).await?;
        self.store.field_set(&self.keys.machine, id, id).await?;
        Ok(id.to_string())
    }

    /// Returns listing metadata for the given ids, most recent first.
    ///
    /// Ids with no recorded write time are treated as nonexistent and
    /// dropped. With `dedupe` set, labelled sessions are always kept while
    /// unlabelled sessions sharing a content fingerprint collapse to the
    /// most recently written one. Sessions written before fingerprints
    /// existed are fingerprinted on the fly and the result is written back
    /// best-effort; a failed write-back never fails the listing.
    pub async fn metadata(&self, ids: &[String], dedupe: bool) -> Result<Vec<SessionMetadata>> {
        let (times, labels, friendlies, hashes) = tokio::try_join!(
            self.store.field_multi_get(&self.keys.time, ids),
            self.store.field_multi_get(&self.keys.label, ids),
            self.store.field_multi_get(&self.keys.machine, ids),
            self.store.field_multi_get(&self.keys.hash, ids),
        )?;

        let mut entries = Vec::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            let Some(time) = times[i].clone() else {
                continue;
            };
            entries.push(Entry {
                id: id.clone(),
                time,
                label: labels[i].clone().filter(|label| !label.is_empty()),
                friendly_id: friendlies[i].clone(),
                content_hash: hashes[i].clone(),
            });
        }

        let entries = if dedupe {
            self.dedupe_entries(entries).await?
        } else {
            entries
        };

        let mut listing: Vec<SessionMetadata> =
            entries.into_iter().map(Entry::into_metadata).collect();
        listing.sort_by(|a, b| b.time.cmp(&a.time));
        Ok(listing)
    }

    /// Collapses unlabelled entries sharing a fingerprint to the latest
    /// one; labelled entries are kept unconditionally.
    async fn dedupe_entries(&self, entries: Vec<Entry>) -> Result<Vec<Entry>> {
        let (labelled, unlabelled): (Vec<Entry>, Vec<Entry>) =
            entries.into_iter().partition(|entry| entry.label.is_some());

        let resolved = self.resolve_missing_hashes(unlabelled).await?;

        let mut latest: HashMap<String, Entry> = HashMap::new();
        for entry in resolved {
            let hash = entry.content_hash.clone().unwrap_or_default();
            let newer = match latest.get(&hash) {
                Some(existing) => entry.time > existing.time,
                None => true,
            };
            if newer {
                latest.insert(hash, entry);
            }
        }

        let mut kept = labelled;
        kept.extend(latest.into_values());
        Ok(kept)
    }

    /// Fingerprints entries that predate content hashing.
    ///
    /// The computed hashes feed this call's grouping; persisting them back
    /// is a best-effort side-write. Write-backs fan out concurrently and
    /// are awaited together, with each failure logged and swallowed.
    async fn resolve_missing_hashes(&self, mut entries: Vec<Entry>) -> Result<Vec<Entry>> {
        let missing: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.content_hash.is_none())
            .map(|(i, _)| i)
            .collect();
        if missing.is_empty() {
            return Ok(entries);
        }

        let ids: Vec<String> = missing.iter().map(|&i| entries[i].id.clone()).collect();
        let payloads = try_join_all(ids.iter().map(|id| self.get(id))).await?;

        let mut backfills = Vec::with_capacity(missing.len());
        for (&i, payload) in missing.iter().zip(payloads) {
            // A session with a write time but no payload still lists; it
            // fingerprints as the empty snapshot.
            let hash = fingerprint(&payload.unwrap_or_default());
            entries[i].content_hash = Some(hash.clone());

            let store = Arc::clone(&self.store);
            let key = self.keys.hash.clone();
            let id = entries[i].id.clone();
            backfills.push(async move {
                if let Err(err) = store.field_set(&key, &id, &hash).await {
                    tracing::warn!(id = %id, error = %err, "content hash backfill failed");
                }
            });
        }
        join_all(backfills).await;

        Ok(entries)
    }
}

/// Working row assembled from the per-field multi-gets.
struct Entry {
    id: String,
    time: String,
    label: Option<String>,
    friendly_id: Option<String>,
    content_hash: Option<String>,
}

impl Entry {
    fn into_metadata(self) -> SessionMetadata {
        SessionMetadata {
            id: self.id,
            time: self.time,
            label: self.label,
            friendly_id: self.friendly_id,
        }
    }
}
