use std::sync::Arc;

use anyhow::Result;

use super::types::{Cart, CartId, Item, ItemId};
use crate::store::repository::CartRepository;

/// The cart domain logic.
///
/// Every mutation is a non-atomic read-modify-write over the adapter: load
/// the current record, apply the change in memory, save the whole record
/// back. Two concurrent mutations of the same cart can race, with both
/// loading the same prior state and the second save overwriting the first
/// (lost update, last writer wins at the store). No lock is held across the
/// two steps.
pub struct CartService {
    repo: Arc<CartRepository>,
}

impl CartService {
    pub fn new(repo: Arc<CartRepository>) -> Self {
        Self { repo }
    }

    /// Lists every cart currently in the store.
    pub async fn list_carts(&self) -> Result<Vec<Cart>> {
        self.repo.list_all().await
    }

    /// Fetches one cart, or `None` if no record exists for the identifier.
    pub async fn get_cart(&self, cart_id: CartId) -> Result<Option<Cart>> {
        self.repo.load(cart_id).await
    }

    /// Adds `quantity` of `item_name` to the cart, creating the cart record
    /// if none exists yet.
    ///
    /// Items are unique by name within a cart: an existing item with the
    /// same name has its quantity increased; otherwise a new item with a
    /// fresh identifier is appended. The resulting cart is always persisted,
    /// freshly created or not. Returns the item as stored, carrying the
    /// updated total.
    ///
    /// The caller-facing boundary rejects non-positive quantities before
    /// this runs.
    pub async fn add_item(&self, cart_id: CartId, item_name: &str, quantity: i64) -> Result<Item> {
        let mut cart = self
            .repo
            .load(cart_id)
            .await?
            .unwrap_or_else(|| Cart::empty(cart_id));

        let item = match cart
            .items
            .iter_mut()
            .find(|item| item.item_name == item_name)
        {
            Some(existing) => {
                existing.quantity += quantity;
                existing.clone()
            }
            None => {
                let item = Item {
                    item_id: ItemId::new(),
                    item_name: item_name.to_string(),
                    quantity,
                };
                cart.items.push(item.clone());
                item
            }
        };

        self.repo.save(&cart).await?;

        Ok(item)
    }

    /// Fetches one item by identifier. An absent cart or a cart without a
    /// matching item both yield `None`; the match is by id, not by name.
    pub async fn get_item(&self, cart_id: CartId, item_id: ItemId) -> Result<Option<Item>> {
        let cart = self.repo.load(cart_id).await?;

        Ok(cart.and_then(|cart| cart.items.into_iter().find(|item| item.item_id == item_id)))
    }

    /// Deletes the whole cart record. Returns `true` if it existed.
    pub async fn delete_cart(&self, cart_id: CartId) -> Result<bool> {
        self.repo.delete(cart_id).await
    }

    /// Removes the item with `item_id` from the cart.
    ///
    /// Returns `false` without writing when the cart or the item is absent;
    /// otherwise persists the filtered cart and returns `true`.
    pub async fn delete_item(&self, cart_id: CartId, item_id: ItemId) -> Result<bool> {
        let Some(mut cart) = self.repo.load(cart_id).await? else {
            return Ok(false);
        };

        let before = cart.items.len();
        cart.items.retain(|item| item.item_id != item_id);
        if cart.items.len() == before {
            return Ok(false);
        }

        self.repo.save(&cart).await?;

        Ok(true)
    }

    /// Removes up to `quantity` units of the item and returns how many were
    /// actually removed.
    ///
    /// If the item holds no more than `quantity`, the whole item is removed
    /// and its prior quantity is the count (remove-up-to-available, not
    /// strict removal of exactly `quantity`). Otherwise the item stays with
    /// its quantity reduced by `quantity`. The updated cart is persisted in
    /// both branches; an absent cart or item removes nothing and writes
    /// nothing. A cart emptied this way persists as an empty record.
    pub async fn remove_quantity(
        &self,
        cart_id: CartId,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<i64> {
        let Some(mut cart) = self.repo.load(cart_id).await? else {
            return Ok(0);
        };

        let Some(pos) = cart.items.iter().position(|item| item.item_id == item_id) else {
            return Ok(0);
        };

        let removed = if cart.items[pos].quantity <= quantity {
            cart.items.remove(pos).quantity
        } else {
            cart.items[pos].quantity -= quantity;
            quantity
        };

        self.repo.save(&cart).await?;

        Ok(removed)
    }

    /// Wipes every cart in the store.
    pub async fn clear_carts(&self) -> Result<()> {
        self.repo.clear_all().await
    }
}
