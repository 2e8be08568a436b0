//! Shared types for the Order Desk workspace
//!
//! Domain models (clients, products, orders) and the pure formatting
//! utilities consumed by both the draft engine and presentation layers.

pub mod models;
pub mod util;
pub mod validate;

// Re-exports
pub use models::{Client, Order, OrderStatus, Product};
pub use serde::{Deserialize, Serialize};
