use tokio::sync::oneshot;

use crate::domain::{Order, OrderCreate, OrderDetail, OrderId};
use crate::error::OrderError;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by the order book.
#[derive(Debug)]
pub enum OrderRequest {
    InsertOrder {
        order: OrderCreate,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    /// Inserts all rows or none of them.
    InsertDetails {
        details: Vec<OrderDetail>,
        respond_to: ServiceResponse<usize, OrderError>,
    },
    GetOrder {
        id: OrderId,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    ListDetails {
        order_id: OrderId,
        respond_to: ServiceResponse<Vec<OrderDetail>, OrderError>,
    },
    Shutdown,
}
