use anyhow::Result;
use async_trait::async_trait;

/// Contract for the key-value store holding cart records.
///
/// Keys are canonical cart-id strings; values are opaque text payloads the
/// repository encodes and decodes. Writes overwrite unconditionally (last
/// writer wins); the contract carries no compare-and-swap or locking.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Fetches the payload stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous payload.
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Returns `true` if the key existed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Enumerates every key currently present. No ordering guarantee.
    async fn keys(&self) -> Result<Vec<String>>;

    /// Wipes every key in the store.
    async fn flush_all(&self) -> Result<()>;
}
