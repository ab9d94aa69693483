//! Turning a selection of cart entries into a placed order.

mod request;
mod service;

pub use request::{CheckoutForm, CheckoutRequest};
pub use service::{CheckoutService, OrderReceipt};
