use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Order, OrderCreate, OrderDetail, OrderId};
use crate::error::OrderError;
use crate::messages::OrderRequest;

/// Client for the order book.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(OrderClient => fn insert_order(order: OrderCreate) -> Order as OrderRequest::InsertOrder, Error = OrderError);
client_method!(OrderClient => fn insert_details(details: Vec<OrderDetail>) -> usize as OrderRequest::InsertDetails, Error = OrderError);
client_method!(OrderClient => fn get_order(id: OrderId) -> Option<Order> as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn list_details(order_id: OrderId) -> Vec<OrderDetail> as OrderRequest::ListDetails, Error = OrderError);
