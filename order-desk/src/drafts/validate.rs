//! Draft validation
//!
//! The schema itself lives on the models as `validator` derive rules
//! (see `shared::models` and [`super::engine::OrderDraft`]). This module
//! runs the schema and flattens the nested [`ValidationErrors`] tree into a
//! dotted-path map the form layer can index directly:
//! `client.phone`, `products[0].name`, ...
//!
//! Validation is pure and idempotent; it runs on every field change, not
//! just on submit.

use shared::models::Product;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::engine::OrderDraft;

/// Per-field validation messages, keyed by dotted field path.
///
/// Ordered by path so error reporting is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One message per field path; the first insert wins.
    fn insert_first(&mut self, path: String, message: String) {
        self.0.entry(path).or_insert(message);
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (path, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{path}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate the whole draft: the scalar fields plus every ledger line item.
pub fn validate_draft(draft: &OrderDraft, products: &[Product]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if let Err(tree) = draft.validate() {
        flatten(&tree, "", &mut errors);
    }
    for (index, product) in products.iter().enumerate() {
        if let Err(tree) = product.validate() {
            flatten(&tree, &format!("products[{index}]."), &mut errors);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a single line item before it enters the ledger.
pub fn validate_product(product: &Product) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if let Err(tree) = product.validate() {
        flatten(&tree, "", &mut errors);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn flatten(tree: &ValidationErrors, prefix: &str, out: &mut FieldErrors) {
    for (field, kind) in tree.errors() {
        let path = format!("{prefix}{field}");
        match kind {
            ValidationErrorsKind::Field(failures) => {
                // A blank field fails both the required check and the
                // pattern rule; report the required message in that case.
                let failure = failures
                    .iter()
                    .find(|f| f.code == "required")
                    .or_else(|| failures.first());
                if let Some(failure) = failure {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    out.insert_first(path, message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten(nested, &format!("{path}."), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten(nested, &format!("{path}[{index}]."), out);
                }
            }
        }
    }
}
