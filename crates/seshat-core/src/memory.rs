//! In-memory hash store.
//!
//! Backs the test suite and local development. A single `RwLock` over the
//! whole map gives `batch_set` its all-or-nothing visibility and
//! `field_set_if_absent` its compare-and-set guarantee for free.

use crate::error::Result;
use crate::kv::{FieldWrite, HashStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A process-local [`HashStore`] backed by nested hash maps.
#[derive(Debug, Default)]
pub struct InMemoryHashStore {
    maps: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryHashStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of one hash key, mainly for assertions in tests.
    pub async fn dump(&self, key: &str) -> HashMap<String, String> {
        self.maps.read().await.get(key).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl HashStore for InMemoryHashStore {
    async fn field_set(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let mut maps = self.maps.write().await;
        maps.entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn field_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let maps = self.maps.read().await;
        Ok(maps.get(key).and_then(|fields| fields.get(field)).cloned())
    }

    async fn field_multi_get(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        let maps = self.maps.read().await;
        let hash = maps.get(key);
        Ok(fields
            .iter()
            .map(|field| hash.and_then(|h| h.get(field)).cloned())
            .collect())
    }

    async fn field_set_if_absent(&self, key: &str, field: &str, value: &str) -> Result<bool> {
        let mut maps = self.maps.write().await;
        let hash = maps.entry(key.to_string()).or_default();
        if hash.contains_key(field) {
            return Ok(false);
        }
        hash.insert(field.to_string(), value.to_string());
        Ok(true)
    }

    async fn batch_set(&self, writes: &[FieldWrite]) -> Result<()> {
        // One write guard for the whole batch keeps readers from seeing a
        // partially-applied group.
        let mut maps = self.maps.write().await;
        for write in writes {
            maps.entry(write.key.clone())
                .or_default()
                .insert(write.field.clone(), write.value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = InMemoryHashStore::new();
        store.field_set("k", "f", "v").await.unwrap();
        assert_eq!(store.field_get("k", "f").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn get_missing_field_is_none() {
        let store = InMemoryHashStore::new();
        assert_eq!(store.field_get("k", "missing").await.unwrap(), None);
        store.field_set("k", "f", "v").await.unwrap();
        assert_eq!(store.field_get("k", "missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn multi_get_preserves_field_order_with_gaps() {
        let store = InMemoryHashStore::new();
        store.field_set("k", "a", "1").await.unwrap();
        store.field_set("k", "c", "3").await.unwrap();

        let fields = vec!["c".to_string(), "b".to_string(), "a".to_string()];
        let values = store.field_multi_get("k", &fields).await.unwrap();
        assert_eq!(
            values,
            vec![Some("3".to_string()), None, Some("1".to_string())]
        );
    }

    #[tokio::test]
    async fn multi_get_on_unknown_key_is_all_none() {
        let store = InMemoryHashStore::new();
        let fields = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            store.field_multi_get("nope", &fields).await.unwrap(),
            vec![None, None]
        );
    }

    #[tokio::test]
    async fn set_if_absent_claims_only_once() {
        let store = InMemoryHashStore::new();
        assert!(store.field_set_if_absent("k", "f", "first").await.unwrap());
        assert!(!store.field_set_if_absent("k", "f", "second").await.unwrap());
        assert_eq!(
            store.field_get("k", "f").await.unwrap(),
            Some("first".to_string())
        );
    }

    #[tokio::test]
    async fn batch_set_applies_every_write() {
        let store = InMemoryHashStore::new();
        let writes = vec![
            FieldWrite::new("time", "s1", "t"),
            FieldWrite::new("data", "s1", "d"),
            FieldWrite::new("hash", "s1", "h"),
        ];
        store.batch_set(&writes).await.unwrap();

        assert_eq!(store.field_get("time", "s1").await.unwrap(), Some("t".to_string()));
        assert_eq!(store.field_get("data", "s1").await.unwrap(), Some("d".to_string()));
        assert_eq!(store.field_get("hash", "s1").await.unwrap(), Some("h".to_string()));
    }

    #[tokio::test]
    async fn concurrent_set_if_absent_admits_exactly_one_claimer() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryHashStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .field_set_if_absent("aliases", "brave-otter", &format!("id-{i}"))
                    .await
                    .unwrap()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
