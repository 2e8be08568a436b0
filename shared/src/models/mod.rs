pub mod client;
pub mod order;
pub mod product;

pub use client::Client;
pub use order::{Order, OrderStatus};
pub use product::Product;
