//! Order draft subsystem
//!
//! Everything that happens between "new order" and "submit":
//!
//! - **engine**: the draft state machine and its named mutation entry points
//! - **ledger**: the insertion-ordered line-item list
//! - **money**: decimal subtotal / grand-total arithmetic
//! - **validate**: schema application and field-error flattening
//!
//! The update graph is deliberately explicit: cross-field derivation
//! (client selection filling phone/address, totals tracking the ledger and
//! shipping cost) happens inside the engine's entry points, not through
//! observer chains.

pub mod engine;
pub mod ledger;
pub mod money;
pub mod validate;


// Re-exports
pub use engine::{DraftError, OrderDraft, OrderDraftEngine, SuggestRequest, Totals};
pub use ledger::ProductLedger;
pub use validate::{FieldErrors, validate_draft, validate_product};
