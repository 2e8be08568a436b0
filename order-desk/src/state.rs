//! Application state container
//!
//! A single-owner container passed explicitly to whatever needs read/write
//! access; there is no ambient/global store. The directory is read-only
//! after startup, the order store grows by appends and status transitions.

use shared::models::Order;

use crate::directory::ClientDirectory;
use crate::drafts::OrderDraftEngine;
use crate::store::{OrderStore, StoreError};

#[derive(Debug, Default)]
pub struct AppState {
    pub directory: ClientDirectory,
    pub store: OrderStore,
}

impl AppState {
    pub fn new(directory: ClientDirectory) -> Self {
        Self {
            directory,
            store: OrderStore::new(),
        }
    }

    /// Start composing a new order against the roster.
    pub fn begin_draft(&self) -> OrderDraftEngine {
        OrderDraftEngine::new(&self.directory)
    }

    /// Hand a submitted order to the store. A duplicate id is surfaced to
    /// the caller, never silently dropped.
    pub fn commit(&mut self, order: Order) -> Result<(), StoreError> {
        self.store.append(order)
    }
}
