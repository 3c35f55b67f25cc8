//! Shopping-Cart Service Library
//!
//! This library crate defines the core modules of the cart REST service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems:
//!
//! - **`store`**: The persistence layer. Defines the key-value backend
//!   contract, ships an in-process implementation, and hosts the repository
//!   that serializes cart records to and from JSON store values.
//! - **`cart`**: The domain layer. Implements the cart mutation rules
//!   (merge-by-name adds, remove-up-to-available quantity removal, cart
//!   lifecycle) and the HTTP handlers exposing them.

pub mod cart;
pub mod store;
