//! Line-item ledger
//!
//! The ordered list of products attached to the draft under construction.
//! Items are appended after passing the product schema; there is no removal
//! or in-place edit, re-adding is the correction path.

use shared::models::Product;
use shared::util::format_article;

use super::money;
use super::validate::{FieldErrors, validate_product};

#[derive(Debug, Clone, Default)]
pub struct ProductLedger {
    items: Vec<Product>,
}

impl ProductLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a line item. A failed add leaves the ledger
    /// unchanged and surfaces the field errors.
    pub fn add(&mut self, mut product: Product) -> Result<(), FieldErrors> {
        validate_product(&product)?;
        product.article = format_article(&product.article);
        tracing::debug!(
            name = %product.name,
            article = %product.article,
            count = product.count,
            "line item added"
        );
        self.items.push(product);
        Ok(())
    }

    /// Insertion order; the index is the display row number.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Sum of `count * cost` over all items.
    pub fn subtotal(&self) -> f64 {
        money::subtotal(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
