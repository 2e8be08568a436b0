//! Product Model

use crate::validate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order line item
///
/// Created when the operator confirms the add-product row. Once attached
/// to a ledger it is never edited in place; re-adding is the correction
/// path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(custom(function = validate::product_name_required))]
    pub name: String,
    #[validate(custom(function = validate::article_required))]
    pub article: String,
    /// Quantity
    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub count: u32,
    /// Unit price in currency unit
    #[validate(range(min = 1.0, message = "Cost must be at least 1"))]
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        article: impl Into<String>,
        count: u32,
        cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            article: article.into(),
            count,
            cost,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_line_item_passes() {
        assert!(Product::new("Box", "A1", 2, 500.0).validate().is_ok());
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(Product::new("Box", "A1", 0, 500.0).validate().is_err());
    }

    #[test]
    fn blank_article_is_rejected() {
        assert!(Product::new("Box", "  ", 1, 500.0).validate().is_err());
    }

    #[test]
    fn cost_below_one_is_rejected() {
        assert!(Product::new("Box", "A1", 1, 0.5).validate().is_err());
    }
}
