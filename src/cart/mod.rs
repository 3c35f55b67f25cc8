//! Cart Domain Module
//!
//! Implements the cart mutation logic and the HTTP boundary in front of it.
//!
//! ## Core Concepts
//! - **Records**: Each cart is one JSON document in the store; items within a
//!   cart are unique by name and carry their own identifier and quantity.
//! - **Read-modify-write**: Every mutation loads the current record through
//!   the store adapter, changes it in memory, and saves it back whole. No
//!   lock spans the two steps, so concurrent writers to the same cart follow
//!   last-writer-wins (an accepted lost-update limitation).
//! - **Absence**: Missing carts and items are ordinary outcomes surfaced as
//!   `None` / `false` / `0`, turned into 404 responses at the HTTP boundary.
//!
//! ## Submodules
//! - **`service`**: The domain operations (add, get, delete, remove-quantity, list, clear).
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Response bodies serialized over HTTP.
//! - **`types`**: The cart and item records and their identifiers.

pub mod handlers;
pub mod protocol;
pub mod service;
pub mod types;
