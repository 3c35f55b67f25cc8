use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a cart.
///
/// Supplied by the caller; its canonical hyphenated string form is the
/// record key in the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CartId(pub Uuid);

impl CartId {
    /// Generates a new random UUID v4-based CartId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an item within a cart.
///
/// Generated when an item is first added under a name the cart does not
/// contain yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generates a new random UUID v4-based ItemId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, quantified line entry within a cart.
///
/// Items within one cart are unique by name: adding under an existing name
/// increases that item's quantity instead of creating a second record. The
/// quantity stays above zero for as long as the item exists; an item driven
/// to zero is removed from the cart entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub item_id: ItemId,
    pub item_name: String,
    pub quantity: i64,
}

/// A cart record as persisted: one JSON document per cart identifier.
///
/// A cart with zero items is a legal state: emptying a cart through
/// quantity removal leaves the record in place rather than deleting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub cart_id: CartId,
    pub items: Vec<Item>,
}

impl Cart {
    /// Creates an empty cart under the given identifier.
    pub fn empty(cart_id: CartId) -> Self {
        Self {
            cart_id,
            items: Vec::new(),
        }
    }
}
