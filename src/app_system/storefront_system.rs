use tracing::{error, info};

use super::config::SystemConfig;
use crate::actors::OrderBook;
use crate::cart::CartActor;
use crate::checkout::CheckoutService;
use crate::clients::{CartClient, OrderClient};

/// The application system that owns the cart and order book tasks.
///
/// Built once at start-up; views get clones of the clients instead of
/// reaching for global state.
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub checkout: CheckoutService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        info!(buffer_size = config.buffer_size, "Starting storefront system");

        // 1. Cart store
        let (cart_actor, cart_store_client) = CartActor::new(config.buffer_size);
        let cart_client = CartClient::new(cart_store_client);
        let cart_handle = tokio::spawn(cart_actor.run());

        // 2. Order book
        let (order_book, order_client) = OrderBook::new(config.buffer_size);
        let order_handle = tokio::spawn(order_book.run());

        let checkout = CheckoutService::new(order_client.clone());

        Self {
            cart_client,
            order_client,
            checkout,
            handles: vec![cart_handle, order_handle],
        }
    }

    /// Waits for both tasks to finish, so any `CartClient` clones handed out
    /// to views must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The cart actor stops once its last client is gone; the order book
        // also gets an explicit shutdown since the checkout service holds a
        // clone of its client.
        if let Err(e) = self.order_client.shutdown().await {
            error!(error = %e, "Order book already stopped");
        }
        drop(self.cart_client);
        drop(self.order_client);
        drop(self.checkout);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
