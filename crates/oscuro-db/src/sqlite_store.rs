//! `SQLite` implementation of the `PreferenceStore` trait.

use async_trait::async_trait;
use futures_util::{StreamExt, stream};
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use tokio::sync::Mutex;
use tracing::warn;

use oscuro_core::{
    PreferenceSnapshot, PreferenceStore, PreferenceValue, RepositoryError, SnapshotStream,
};

use crate::broadcaster::SnapshotBroadcaster;

const UPSERT_SQL: &str = "INSERT INTO settings_kv (key, value, updated_at) VALUES (?, ?, ?) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// `SQLite` implementation of the `PreferenceStore` trait.
///
/// One row per preference key; the value column holds the JSON encoding of
/// the typed scalar.
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
    updates: SnapshotBroadcaster,
    /// Held across re-read and publish so the last publish is the newest state.
    publish_lock: Mutex<()>,
}

impl SqlitePreferenceStore {
    /// Create a new `SQLite` preference store.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            updates: SnapshotBroadcaster::new(),
            publish_lock: Mutex::new(()),
        }
    }

    /// Ensure the settings table exists.
    ///
    /// Call this during initialization to set up the schema.
    pub async fn ensure_table(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings_kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Re-read the table and hand the result to live subscribers.
    async fn publish_current(&self) {
        if self.updates.subscriber_count() == 0 {
            return;
        }
        let _guard = self.publish_lock.lock().await;
        match load_snapshot(&self.pool).await {
            Ok(snapshot) => self.updates.publish(snapshot),
            Err(err) => warn!(error = %err, "Write succeeded but snapshot re-read failed"),
        }
    }
}

async fn load_snapshot(pool: &SqlitePool) -> Result<PreferenceSnapshot, RepositoryError> {
    let rows = sqlx::query("SELECT key, value FROM settings_kv")
        .fetch_all(pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let mut snapshot = PreferenceSnapshot::new();
    for row in &rows {
        let key: String = row.get("key");
        let json: String = row.get("value");
        if let Some(value) = decode_value(&key, &json)? {
            snapshot = snapshot.with(key, value);
        }
    }
    Ok(snapshot)
}

/// Decode one stored value.
///
/// Text that is not JSON is corruption. JSON that is neither a boolean nor an
/// integer is skipped so the key falls back to its default.
fn decode_value(key: &str, json: &str) -> Result<Option<PreferenceValue>, RepositoryError> {
    let parsed: Value = serde_json::from_str(json).map_err(|e| {
        RepositoryError::Serialization(format!("value of '{key}' is corrupt: {e}"))
    })?;

    let value = match &parsed {
        Value::Bool(flag) => Some(PreferenceValue::Bool(*flag)),
        Value::Number(number) => number.as_i64().map(PreferenceValue::Int),
        _ => None,
    };
    if value.is_none() {
        warn!(key, stored = %parsed, "Ignoring stored value of unsupported type");
    }
    Ok(value)
}

fn encode(value: PreferenceValue) -> Result<String, RepositoryError> {
    serde_json::to_string(&value).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    fn observe_all(&self) -> SnapshotStream {
        // Subscribe before reading so a write landing in between is not missed.
        let live = self.updates.subscribe();
        let pool = self.pool.clone();
        let current = stream::once(async move { load_snapshot(&pool).await });
        Box::pin(current.chain(live))
    }

    async fn read_all(&self) -> Result<PreferenceSnapshot, RepositoryError> {
        load_snapshot(&self.pool).await
    }

    async fn write_one(&self, key: &str, value: PreferenceValue) -> Result<(), RepositoryError> {
        let json = encode(value)?;

        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(&json)
            .bind(timestamp())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.publish_current().await;
        Ok(())
    }

    async fn write_many(
        &self,
        entries: Vec<(String, PreferenceValue)>,
    ) -> Result<(), RepositoryError> {
        let updated_at = timestamp();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        for (key, value) in &entries {
            sqlx::query(UPSERT_SQL)
                .bind(key.as_str())
                .bind(encode(*value)?)
                .bind(&updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.publish_current().await;
        Ok(())
    }
}
