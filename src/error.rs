use thiserror::Error;

use crate::domain::OrderId;

/// Errors talking to the cart service.
///
/// Cart transitions themselves never fail; only the channel to the task that
/// owns the cart can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("No products selected for checkout")]
    NothingSelected,
    #[error("Shipping address is required")]
    MissingShippingAddress,
    #[error("Invalid checkout request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
