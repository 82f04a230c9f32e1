//! Redis-backed [`HashStore`] implementation.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use seshat_core::{FieldWrite, HashStore, Result, StoreError};

fn store_err(err: redis::RedisError) -> StoreError {
    StoreError::storage(err.to_string())
}

/// A [`HashStore`] over a multiplexed async Redis connection.
///
/// The connection is cheap to clone, so one adapter instance serves any
/// number of concurrent store operations. Atomicity obligations map onto
/// Redis primitives directly: `field_set_if_absent` is HSETNX and
/// `batch_set` is a MULTI/EXEC pipeline.
#[derive(Clone)]
pub struct RedisHashStore {
    conn: MultiplexedConnection,
}

impl RedisHashStore {
    /// Connects to a Redis instance, e.g. `redis://127.0.0.1:6379`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the URL is invalid or the connection
    /// cannot be established.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(store_err)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(store_err)?;
        tracing::debug!(url, "connected to redis");
        Ok(Self { conn })
    }

    /// Wraps an existing multiplexed connection.
    pub fn from_connection(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl HashStore for RedisHashStore {
    async fn field_set(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.hset(key, field, value).await.map_err(store_err)?;
        Ok(())
    }

    async fn field_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.hget(key, field).await.map_err(store_err)?;
        Ok(value)
    }

    async fn field_multi_get(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        // HMGET requires at least one field.
        if fields.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.clone();
        // Issued as an explicit HMGET so a single-field call keeps the
        // order-preserving Vec shape instead of degrading to HGET.
        let mut cmd = redis::cmd("HMGET");
        cmd.arg(key);
        for field in fields {
            cmd.arg(field);
        }
        let values: Vec<Option<String>> = cmd.query_async(&mut conn).await.map_err(store_err)?;
        Ok(values)
    }

    async fn field_set_if_absent(&self, key: &str, field: &str, value: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let was_set: bool = conn.hset_nx(key, field, value).await.map_err(store_err)?;
        Ok(was_set)
    }

    async fn batch_set(&self, writes: &[FieldWrite]) -> Result<()> {
        let mut conn = self.conn.clone();
        let mut pipe = redis::pipe();
        pipe.atomic();
        for write in writes {
            pipe.hset(&write.key, &write.field, &write.value).ignore();
        }
        let _: () = pipe.query_async(&mut conn).await.map_err(store_err)?;
        Ok(())
    }
}
