//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! [`create_mock_client`] and [`create_mock_order_client`] hand back a client
//! plus the receiving end of its channel. Tests then pull requests off the
//! channel with the `expect_*` helpers and answer them however the scenario
//! needs, including not at all.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Reducer, StoreClient, StoreRequest};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderCreate, OrderDetail};
use crate::error::OrderError;
use crate::messages::OrderRequest;

pub fn create_mock_client<R: Reducer>(buffer_size: usize) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Intent, oneshot::Sender<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { intent, respond_to }) => Some((intent, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<oneshot::Sender<R::State>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub fn create_mock_order_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is an InsertOrder request
pub async fn expect_insert_order(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(OrderCreate, oneshot::Sender<Result<Order, OrderError>>)> {
    match receiver.recv().await {
        Some(OrderRequest::InsertOrder { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an InsertDetails request
pub async fn expect_insert_details(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(Vec<OrderDetail>, oneshot::Sender<Result<usize, OrderError>>)> {
    match receiver.recv().await {
        Some(OrderRequest::InsertDetails { details, respond_to }) => Some((details, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartIntent, CartReducer};
    use crate::clients::CartClient;
    use crate::domain::{CartState, Product};

    #[tokio::test]
    async fn test_mock_cart_client() {
        let (inner, mut receiver) = create_mock_client::<CartReducer>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.increase_quantity(3).await });

        let (intent, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch request");
        assert_eq!(intent, CartIntent::IncreaseQuantity(3));
        responder.send(false).unwrap();

        assert_eq!(task.await.unwrap(), Ok(false));
    }

    #[tokio::test]
    async fn test_mock_snapshot() {
        let (inner, mut receiver) = create_mock_client::<CartReducer>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.item_count().await });

        let responder = expect_snapshot(&mut receiver).await.expect("Expected Snapshot request");
        let state = [CartIntent::add(Product::new(1, "A", 1_000), None)]
            .into_iter()
            .fold(CartState::new(), |state, intent| <CartReducer as Reducer>::reduce(state, intent).0);
        responder.send(state).unwrap();

        assert_eq!(task.await.unwrap(), Ok(1));
    }
}
