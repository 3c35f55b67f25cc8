//! Cart HTTP Protocol
//!
//! Defines the response bodies the cart endpoints serialize over HTTP.
//!
//! Single carts are returned as bare `Cart` records; the remaining endpoints
//! wrap their payload in one of the envelopes below so every response names
//! what it carries.

use serde::{Deserialize, Serialize};

use super::types::{Cart, Item};

/// Envelope for the cart listing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartsResponse {
    pub carts: Vec<Cart>,
}

/// Envelope for endpoints returning a single item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: Item,
}

/// Acknowledgment body for destructive operations.
///
/// Carries a human-readable summary, e.g. `"Cart deleted."` or
/// `"3 items removed."`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: String,
}

/// Error body carrying the reason a request was refused.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
