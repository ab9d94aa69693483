use serde::{Deserialize, Serialize};

use crate::domain::{format_vnd, CartEntry, CartState, PaymentMethod, ProductId};
use crate::error::CheckoutError;

/// The selected entries and their subtotal, handed from the cart screen to
/// order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub entries: Vec<CartEntry>,
    pub subtotal: u64,
}

impl CheckoutRequest {
    /// Fails with [`CheckoutError::NothingSelected`] when no selected id is
    /// in the cart.
    pub fn from_selection(state: &CartState, selection: &[ProductId]) -> Result<Self, CheckoutError> {
        let entries = state.selected_entries(selection);
        if entries.is_empty() {
            return Err(CheckoutError::NothingSelected);
        }
        Ok(Self {
            subtotal: state.selected_total(selection),
            entries,
        })
    }

    /// Checks a request that may have come back from JSON: no entry without
    /// units, and a subtotal that matches the entries.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.entries.is_empty() {
            return Err(CheckoutError::NothingSelected);
        }
        if let Some(entry) = self.entries.iter().find(|entry| entry.quantity == 0) {
            return Err(CheckoutError::InvalidRequest(format!(
                "zero quantity for product {}",
                entry.product_id()
            )));
        }
        let expected = self
            .entries
            .iter()
            .fold(0u64, |total, entry| total.saturating_add(entry.line_total()));
        if expected != self.subtotal {
            return Err(CheckoutError::InvalidRequest(format!(
                "subtotal {} does not match entries ({})",
                self.subtotal, expected
            )));
        }
        Ok(())
    }

    pub fn display_subtotal(&self) -> String {
        format_vnd(self.subtotal)
    }

    pub fn to_json(&self) -> Result<String, CheckoutError> {
        serde_json::to_string(self).map_err(|e| CheckoutError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckoutError> {
        serde_json::from_str(json).map_err(|e| CheckoutError::Serialization(e.to_string()))
    }
}

/// What the shopper fills in on the checkout screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutForm {
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
}

impl CheckoutForm {
    pub fn new(payment_method: PaymentMethod, shipping_address: impl Into<String>) -> Self {
        Self {
            payment_method,
            shipping_address: shipping_address.into(),
        }
    }
}
