use std::sync::Arc;

use anyhow::Result;

use super::backend::KeyValueBackend;
use crate::cart::types::{Cart, CartId};

/// The cart store adapter.
///
/// Translates between cart records and raw key-value operations: one JSON
/// document per cart, keyed by the canonical cart-id string. Absence is a
/// normal outcome (`None` / `false`), never an error; store and decode
/// failures propagate to the caller undecorated.
pub struct CartRepository {
    backend: Arc<dyn KeyValueBackend>,
}

impl CartRepository {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Loads and decodes every cart currently present in the store.
    ///
    /// A record that fails to decode aborts the whole listing. A key that
    /// vanishes between enumeration and the point read is skipped.
    pub async fn list_all(&self) -> Result<Vec<Cart>> {
        let keys = self.backend.keys().await?;

        let mut carts = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(raw) = self.backend.get(&key).await? {
                carts.push(serde_json::from_str(&raw)?);
            }
        }

        Ok(carts)
    }

    /// Fetches and decodes one cart record, or `None` if the key is absent.
    pub async fn load(&self, cart_id: CartId) -> Result<Option<Cart>> {
        match self.backend.get(&cart_id.to_string()).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serializes the full cart record and overwrites the value at its key.
    pub async fn save(&self, cart: &Cart) -> Result<()> {
        let raw = serde_json::to_string(cart)?;
        self.backend.set(&cart.cart_id.to_string(), raw).await
    }

    /// Removes the record for `cart_id`. Returns `true` if it existed.
    pub async fn delete(&self, cart_id: CartId) -> Result<bool> {
        self.backend.delete(&cart_id.to_string()).await
    }

    /// Wipes every record in the backing store.
    pub async fn clear_all(&self) -> Result<()> {
        self.backend.flush_all().await
    }
}
