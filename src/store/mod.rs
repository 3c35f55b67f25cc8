//! Cart Store Module
//!
//! Persistence layer for cart records over a string-keyed key-value backend.
//!
//! ## Core Concepts
//! - **Backend**: `KeyValueBackend` is the contract of the external store:
//!   get/set/delete/enumerate/flush over opaque text payloads.
//! - **Adapter**: `CartRepository` owns the JSON (de)serialization and maps
//!   cart identifiers to store keys; it is the only component that touches
//!   the backend.
//! - **Ownership**: The store is the sole durable owner of cart records; the
//!   domain layer holds transient in-memory copies for one operation at a
//!   time.

pub mod backend;
pub mod memory;
pub mod repository;
