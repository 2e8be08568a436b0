//! Committed order store
//!
//! An insertion-ordered list keyed by unique order id. Orders are appended
//! once and never deleted; the only mutation is a status transition.

use shared::models::{Order, OrderStatus};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("order id already exists: {0}")]
    DuplicateOrderId(i64),

    #[error("order not found: {0}")]
    OrderNotFound(i64),
}

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized order. Duplicate ids are rejected explicitly,
    /// never silently overwritten.
    pub fn append(&mut self, order: Order) -> Result<(), StoreError> {
        if self.orders.iter().any(|existing| existing.id == order.id) {
            return Err(StoreError::DuplicateOrderId(order.id));
        }
        tracing::info!(
            order_id = order.id,
            items = order.products.len(),
            "order appended"
        );
        self.orders.push(order);
        Ok(())
    }

    /// Transition an order's status. Last write wins, including transitions
    /// out of `Completed` / `Rejected`.
    pub fn update_status(&mut self, id: i64, status: OrderStatus) -> Result<(), StoreError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(StoreError::OrderNotFound(id))?;
        tracing::info!(order_id = id, from = %order.status, to = %status, "order status changed");
        order.status = status;
        Ok(())
    }

    pub fn get(&self, id: i64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Insertion order, which is also the display order.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Client;

    fn order(id: i64) -> Order {
        Order {
            id,
            client: Client::new("+7 (900) 111-22-33", "Moscow, 1"),
            delivery_date: "2025-03-07T00:00:00+00:00".to_string(),
            shipping_cost: 0.0,
            products: Vec::new(),
            status: OrderStatus::Created,
            comments: None,
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = OrderStore::new();
        store.append(order(2)).unwrap();
        store.append(order(1)).unwrap();
        let ids: Vec<i64> = store.list().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = OrderStore::new();
        store.append(order(7)).unwrap();
        assert_eq!(
            store.append(order(7)),
            Err(StoreError::DuplicateOrderId(7))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn status_transitions_are_last_write_wins() {
        let mut store = OrderStore::new();
        store.append(order(1)).unwrap();
        store.update_status(1, OrderStatus::Completed).unwrap();
        store.update_status(1, OrderStatus::Rejected).unwrap();
        assert_eq!(store.get(1).unwrap().status, OrderStatus::Rejected);
    }

    #[test]
    fn unknown_id_yields_not_found() {
        let mut store = OrderStore::new();
        assert_eq!(
            store.update_status(99, OrderStatus::Completed),
            Err(StoreError::OrderNotFound(99))
        );
    }
}
