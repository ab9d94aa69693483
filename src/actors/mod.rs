use std::collections::BTreeMap;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::OrderClient;
use crate::domain::{Order, OrderCreate, OrderDetail, OrderId};
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};

// =============================================================================
// ORDER BOOK
// =============================================================================

/// In-memory `Order` / `OrderDetail` tables.
///
/// Order ids are assigned sequentially from 1. Detail rows must reference an
/// existing order.
pub struct OrderBook {
    receiver: mpsc::Receiver<OrderRequest>,
    orders: BTreeMap<OrderId, Order>,
    details: Vec<OrderDetail>,
    next_id: OrderId,
}

impl OrderBook {
    pub fn new(buffer_size: usize) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let book = Self {
            receiver,
            orders: BTreeMap::new(),
            details: Vec::new(),
            next_id: 1,
        };
        (book, OrderClient::new(sender))
    }

    #[instrument(name = "order_book", skip(self))]
    pub async fn run(mut self) {
        info!("OrderBook starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::InsertOrder { order, respond_to } => {
                    self.handle_insert_order(order, respond_to);
                }
                OrderRequest::InsertDetails { details, respond_to } => {
                    self.handle_insert_details(details, respond_to);
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.orders.get(&id).cloned()));
                }
                OrderRequest::ListDetails { order_id, respond_to } => {
                    let rows = self
                        .details
                        .iter()
                        .filter(|detail| detail.order_id == order_id)
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(rows));
                }
                OrderRequest::Shutdown => {
                    info!("OrderBook shutting down");
                    break;
                }
            }
        }
        info!("OrderBook stopped");
    }

    #[instrument(fields(user_id = order.user_id, total_price = order.total_price), skip(self, order, respond_to))]
    fn handle_insert_order(&mut self, order: OrderCreate, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing insert_order request");
        if order.address.trim().is_empty() {
            error!("Rejected order without address");
            let _ = respond_to.send(Err(OrderError::ValidationError("address is empty".to_string())));
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        let order = Order::from_create(id, order);
        self.orders.insert(id, order.clone());
        info!(order_id = id, "Order inserted");
        let _ = respond_to.send(Ok(order));
    }

    #[instrument(fields(rows = details.len()), skip(self, details, respond_to))]
    fn handle_insert_details(&mut self, details: Vec<OrderDetail>, respond_to: ServiceResponse<usize, OrderError>) {
        debug!("Processing insert_details request");
        if let Some(missing) = details.iter().find(|detail| !self.orders.contains_key(&detail.order_id)) {
            error!(order_id = missing.order_id, "Detail references unknown order");
            let _ = respond_to.send(Err(OrderError::NotFound(missing.order_id)));
            return;
        }
        if let Some(empty) = details.iter().find(|detail| detail.qty == 0) {
            error!(product_id = empty.product_id, "Detail with zero quantity");
            let _ = respond_to.send(Err(OrderError::ValidationError(format!(
                "zero quantity for product {}",
                empty.product_id
            ))));
            return;
        }
        let count = details.len();
        self.details.extend(details);
        info!(rows = count, "Order details inserted");
        let _ = respond_to.send(Ok(count));
    }
}
