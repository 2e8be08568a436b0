//! Order Desk core
//!
//! In-memory order management for a single operator session:
//!
//! - **directory**: read-mostly client roster loaded at startup
//! - **drafts**: order draft engine, line-item ledger, schema validation,
//!   and decimal total computation
//! - **store**: the committed order list with status transitions
//! - **services**: the outbound address-suggestion lookup
//! - **state**: the explicitly passed application state container
//!
//! # Data Flow
//!
//! 1. Operator input mutates the [`drafts::OrderDraftEngine`]
//! 2. Every mutation re-runs schema validation and total computation
//! 3. `submit()` freezes the draft into a [`shared::models::Order`]
//! 4. The order is appended to the [`store::OrderStore`]
//! 5. Status changes go straight to `OrderStore::update_status`

pub mod directory;
pub mod drafts;
pub mod services;
pub mod state;
pub mod store;

// Re-exports
pub use directory::ClientDirectory;
pub use drafts::{
    DraftError, FieldErrors, OrderDraft, OrderDraftEngine, ProductLedger, SuggestRequest, Totals,
};
pub use services::suggest_service::{AddressSuggester, DadataSuggester, SuggestError, Suggestion};
pub use state::AppState;
pub use store::{OrderStore, StoreError};

// Re-export shared types for convenience
pub use shared::models::{Client, Order, OrderStatus, Product};
