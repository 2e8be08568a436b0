//! Order draft engine
//!
//! The draft state machine: `Editing` until a successful `submit()`, then
//! `Submitted` (terminal; the caller discards the engine and begins a fresh
//! draft for the next order). All cross-field derivation runs inside the
//! named entry points here, so the update graph stays finite and auditable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{Client, Order, OrderStatus, Product};
use shared::util::{delivery_date_iso, format_phone, local_today, now_millis};
use thiserror::Error;
use validator::Validate;

use super::ledger::ProductLedger;
use super::money;
use super::validate::{FieldErrors, validate_draft};
use crate::directory::ClientDirectory;
use crate::services::suggest_service::{SuggestError, Suggestion};

/// Draft errors
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft validation failed: {0}")]
    Validation(FieldErrors),

    #[error("draft was already submitted")]
    AlreadySubmitted,
}

/// Scalar fields of the order under construction. Line items live in the
/// engine's [`ProductLedger`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderDraft {
    #[validate(nested)]
    pub client: Client,
    pub comments: String,
    pub delivery_date: NaiveDate,
    pub shipping_cost: Option<f64>,
}

/// Computed totals, recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub grand_total: f64,
}

/// A lookup the caller should run against the address suggester.
///
/// `seq` is the staleness guard: feed the lookup's outcome back through
/// [`OrderDraftEngine::apply_suggestions`] with this sequence number, and
/// the engine will discard it if the field has changed since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftState {
    Editing,
    Submitted,
}

pub struct OrderDraftEngine {
    draft: OrderDraft,
    ledger: ProductLedger,
    state: DraftState,
    errors: FieldErrors,
    suggestions: Vec<Suggestion>,
    suggestions_visible: bool,
    /// Monotonically increasing lookup sequence; only the latest issued
    /// sequence may update the suggestion list.
    suggest_seq: u64,
    shipping_input_error: Option<String>,
}

impl OrderDraftEngine {
    /// Begin a draft with the roster's first client pre-filled (formatted
    /// phone), today's delivery date and an empty ledger. An empty roster
    /// yields a draft with no default client.
    pub fn new(directory: &ClientDirectory) -> Self {
        let client = match directory.first() {
            Some(first) => Client {
                id: None,
                name: first.name.clone(),
                phone: format_phone(&first.phone),
                address: first.address.clone(),
            },
            None => Client::new("", ""),
        };
        let mut engine = Self {
            draft: OrderDraft {
                client,
                comments: String::new(),
                delivery_date: local_today(),
                shipping_cost: None,
            },
            ledger: ProductLedger::new(),
            state: DraftState::Editing,
            errors: FieldErrors::default(),
            suggestions: Vec::new(),
            suggestions_visible: false,
            suggest_seq: 0,
            shipping_input_error: None,
        };
        engine.refresh_errors();
        engine
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn products(&self) -> &[Product] {
        self.ledger.items()
    }

    pub fn ledger(&self) -> &ProductLedger {
        &self.ledger
    }

    /// Current field errors, refreshed on every mutation.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        self.state == DraftState::Submitted
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    /// Inline error from the shipping-cost input, if the last raw entry
    /// was not numeric. Does not block submission; the prior valid value
    /// is still in effect.
    pub fn shipping_input_error(&self) -> Option<&str> {
        self.shipping_input_error.as_deref()
    }

    pub fn totals(&self) -> Totals {
        let subtotal = self.ledger.subtotal();
        Totals {
            subtotal,
            grand_total: money::grand_total(subtotal, self.draft.shipping_cost),
        }
    }

    // ── Mutation entry points ───────────────────────────────────────────

    /// Pick a client by name. A roster hit overwrites the draft's phone
    /// (formatted) and address; free text leaves them untouched, which is
    /// how ad-hoc clients not in the roster are entered.
    pub fn select_client(&mut self, directory: &ClientDirectory, name: &str) {
        if !self.editing() {
            return;
        }
        self.draft.client.name = if name.trim().is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        if let Some(found) = directory.find_by_name(name) {
            self.draft.client.phone = format_phone(&found.phone);
            self.draft.client.address = found.address.clone();
            // The address changed; any in-flight lookup is stale now.
            self.suggest_seq += 1;
            self.suggestions.clear();
            self.suggestions_visible = false;
        }
        self.refresh_errors();
    }

    pub fn set_phone(&mut self, phone: &str) {
        if !self.editing() {
            return;
        }
        self.draft.client.phone = phone.to_string();
        self.refresh_errors();
    }

    pub fn set_comments(&mut self, comments: &str) {
        if !self.editing() {
            return;
        }
        self.draft.comments = comments.to_string();
        self.refresh_errors();
    }

    pub fn set_delivery_date(&mut self, date: NaiveDate) {
        if !self.editing() {
            return;
        }
        self.draft.delivery_date = date;
        self.refresh_errors();
    }

    /// Update the address field immediately and, for non-empty text, hand
    /// back a sequence-numbered lookup request. Empty text clears and hides
    /// the suggestion list. Every edit advances the sequence, so results
    /// from lookups issued before this edit can no longer apply.
    pub fn set_address(&mut self, text: &str) -> Option<SuggestRequest> {
        if !self.editing() {
            return None;
        }
        self.draft.client.address = text.to_string();
        self.refresh_errors();
        self.suggest_seq += 1;
        if text.is_empty() {
            self.suggestions.clear();
            self.suggestions_visible = false;
            return None;
        }
        Some(SuggestRequest {
            seq: self.suggest_seq,
            query: text.to_string(),
        })
    }

    /// Apply a lookup outcome. Only the most recently issued sequence is
    /// accepted; anything older is a stale response and is discarded. A
    /// failed lookup is recovered locally as "no suggestions".
    pub fn apply_suggestions(&mut self, seq: u64, result: Result<Vec<Suggestion>, SuggestError>) {
        if self.state == DraftState::Submitted {
            return;
        }
        if seq != self.suggest_seq {
            tracing::debug!(seq, latest = self.suggest_seq, "stale suggestion response discarded");
            return;
        }
        let items = match result {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(%error, "address lookup failed, treating as no suggestions");
                Vec::new()
            }
        };
        self.suggestions_visible = !items.is_empty();
        self.suggestions = items;
    }

    /// Accept a suggestion by row index: overwrite the address and hide
    /// the dropdown. Returns false for an out-of-range index.
    pub fn pick_suggestion(&mut self, index: usize) -> bool {
        if !self.editing() {
            return false;
        }
        let Some(value) = self.suggestions.get(index).map(|s| s.value.clone()) else {
            return false;
        };
        self.draft.client.address = value;
        // The field changed; any in-flight lookup is stale now.
        self.suggest_seq += 1;
        self.suggestions_visible = false;
        self.refresh_errors();
        true
    }

    /// Parse a raw shipping-cost entry. Empty clears the value; a finite
    /// number replaces it; anything else keeps the last valid value and
    /// records an inline error instead of storing the raw text.
    pub fn set_shipping_cost(&mut self, raw: &str) {
        if !self.editing() {
            return;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.draft.shipping_cost = None;
            self.shipping_input_error = None;
        } else {
            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    self.draft.shipping_cost = Some(value);
                    self.shipping_input_error = None;
                }
                _ => {
                    tracing::debug!(input = %trimmed, "non-numeric shipping cost kept out of the draft");
                    self.shipping_input_error =
                        Some("Shipping cost must be a number".to_string());
                }
            }
        }
        self.refresh_errors();
    }

    /// Validate and append a line item to the ledger.
    pub fn add_product(&mut self, product: Product) -> Result<(), DraftError> {
        if self.state == DraftState::Submitted {
            return Err(DraftError::AlreadySubmitted);
        }
        self.ledger.add(product).map_err(DraftError::Validation)?;
        self.refresh_errors();
        Ok(())
    }

    /// Re-run full validation and, on success, freeze the draft into an
    /// [`Order`]: deep copy of client and products, creation-timestamp id,
    /// ISO delivery date, initial status `Created`. The engine transitions
    /// to `Submitted`; on failure it stays `Editing` and nothing is stored.
    pub fn submit(&mut self) -> Result<Order, DraftError> {
        if self.state == DraftState::Submitted {
            return Err(DraftError::AlreadySubmitted);
        }
        validate_draft(&self.draft, self.ledger.items()).map_err(DraftError::Validation)?;

        let comments = self.draft.comments.trim();
        let order = Order {
            id: now_millis(),
            client: self.draft.client.clone(),
            delivery_date: delivery_date_iso(self.draft.delivery_date),
            shipping_cost: self.draft.shipping_cost.unwrap_or(0.0),
            products: self.ledger.items().to_vec(),
            status: OrderStatus::Created,
            comments: (!comments.is_empty()).then(|| comments.to_string()),
        };
        self.state = DraftState::Submitted;
        tracing::info!(
            order_id = order.id,
            items = order.products.len(),
            total = self.totals().grand_total,
            "draft submitted"
        );
        Ok(order)
    }

    fn refresh_errors(&mut self) {
        self.errors = match validate_draft(&self.draft, self.ledger.items()) {
            Ok(()) => FieldErrors::default(),
            Err(errors) => errors,
        };
    }

    fn editing(&self) -> bool {
        if self.state == DraftState::Submitted {
            tracing::warn!("draft already submitted, mutation ignored");
            return false;
        }
        true
    }
}
