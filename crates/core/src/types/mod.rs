//! Core types for KitchenHub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod store;

pub use id::*;
pub use store::{ALL_STORE_ID, ALL_STORE_NAME, ParseStoreSelectorError, StoreSelector};
