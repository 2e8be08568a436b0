//! Order Model

use super::{Client, Product};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Completed,
    Rejected,
}

impl OrderStatus {
    /// List-view label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Committed order
///
/// Created once on successful draft submission, appended to the store and
/// mutated only via status transitions. The client block is captured by
/// value: later roster changes must not retroactively alter past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Creation timestamp in milliseconds, unique within the store
    pub id: i64,
    pub client: Client,
    /// ISO-8601 delivery date
    pub delivery_date: String,
    /// Shipping cost in currency unit
    pub shipping_cost: f64,
    pub products: Vec<Product>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Order {
    /// Check if order is still in its initial state
    pub fn is_created(&self) -> bool {
        self.status == OrderStatus::Created
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    pub fn is_rejected(&self) -> bool {
        self.status == OrderStatus::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
    }

    #[test]
    fn status_labels() {
        assert_eq!(OrderStatus::Created.to_string(), "Created");
        assert_eq!(OrderStatus::Rejected.label(), "Rejected");
    }
}
