//! Client Model

use crate::validate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Client entity
///
/// Loaded in bulk from the roster at startup and also used as the client
/// block of a draft/order, where `phone` holds the display format. The
/// roster may store phones canonically (digits only); normalize once via
/// [`crate::util::format_phone`] before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Optional: ad-hoc clients are identified only by typed name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(
        custom(function = validate::phone_required),
        regex(
            path = *validate::PHONE_RE,
            message = "Phone must be in the format +7 (999) 999-99-99"
        )
    )]
    pub phone: String,
    #[validate(custom(function = validate::address_required))]
    pub address: String,
}

impl Client {
    pub fn new(phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            phone: phone.into(),
            address: address.into(),
        }
    }
}
