use tracing::{error, info, instrument};

use super::request::{CheckoutForm, CheckoutRequest};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderCreate, OrderDetail};
use crate::error::CheckoutError;

/// What was written to the order book for one checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order: Order,
    pub details: Vec<OrderDetail>,
}

/// Places orders for checkout requests.
///
/// The cart is left untouched; removing purchased entries is up to the
/// caller.
#[derive(Clone)]
pub struct CheckoutService {
    order_client: OrderClient,
}

impl CheckoutService {
    pub fn new(order_client: OrderClient) -> Self {
        Self { order_client }
    }

    #[instrument(fields(entries = request.entries.len(), subtotal = request.subtotal), skip(self, request, form))]
    pub async fn place_order(
        &self,
        user_id: u64,
        request: CheckoutRequest,
        form: CheckoutForm,
    ) -> Result<OrderReceipt, CheckoutError> {
        info!("Processing checkout");

        // Step 1: Validate input before anything is written
        if let Err(e) = request.validate() {
            error!(error = %e, "Rejected checkout request");
            return Err(e);
        }
        let address = form.shipping_address.trim();
        if address.is_empty() {
            error!("Checkout without shipping address");
            return Err(CheckoutError::MissingShippingAddress);
        }

        // Step 2: Insert the order row
        let order = self
            .order_client
            .insert_order(OrderCreate {
                user_id,
                total_price: request.subtotal,
                payment_method: form.payment_method,
                address: address.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Order insertion failed");
                e
            })?;

        info!(order_id = order.id, payment_method = %order.payment_method, "Order created");

        // Step 3: Insert one detail row per entry
        let details: Vec<OrderDetail> = request
            .entries
            .iter()
            .map(|entry| OrderDetail {
                order_id: order.id,
                product_id: entry.product_id(),
                qty: entry.quantity,
                unit_price: entry.product.price,
            })
            .collect();

        self.order_client
            .insert_details(details.clone())
            .await
            .map_err(|e| {
                error!(order_id = order.id, error = %e, "Order detail insertion failed");
                e
            })?;

        info!(order_id = order.id, "Checkout completed");
        Ok(OrderReceipt { order, details })
    }
}
