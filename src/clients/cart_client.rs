use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, SubscriptionId};
use crate::cart::{CartIntent, CartStoreClient};
use crate::checkout::CheckoutRequest;
use crate::domain::{CartEntry, CartState, Product, ProductId};
use crate::error::{CartError, CheckoutError};

/// Handle views use to read and change the cart.
///
/// Cloning is cheap; every clone talks to the same cart task.
#[derive(Clone)]
pub struct CartClient {
    inner: CartStoreClient,
}

fn communication_error(e: FrameworkError) -> CartError {
    CartError::ActorCommunicationError(e.to_string())
}

impl CartClient {
    pub fn new(inner: CartStoreClient) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner.snapshot().await.map_err(communication_error)
    }

    pub async fn items(&self) -> Result<Vec<CartEntry>, CartError> {
        Ok(self.snapshot().await?.items().to_vec())
    }

    /// Distinct products in the cart, for the cart badge.
    pub async fn item_count(&self) -> Result<usize, CartError> {
        Ok(self.snapshot().await?.item_count())
    }

    pub async fn selected_total(&self, selection: &[ProductId]) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.selected_total(selection))
    }

    /// Registers `listener` to be called with the new cart after every change.
    ///
    /// The listener runs on the cart task and must not block.
    #[instrument(skip(self, listener))]
    pub async fn subscribe(
        &self,
        listener: impl Fn(&CartState) + Send + 'static,
    ) -> Result<SubscriptionId, CartError> {
        debug!("Sending request");
        self.inner.subscribe(listener).await.map_err(communication_error)
    }

    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, CartError> {
        debug!("Sending request");
        self.inner.unsubscribe(id).await.map_err(communication_error)
    }

    /// Builds the checkout handoff for the selected products.
    #[instrument(skip(self))]
    pub async fn checkout_request(&self, selection: &[ProductId]) -> Result<CheckoutRequest, CheckoutError> {
        let state = self.snapshot().await?;
        CheckoutRequest::from_selection(&state, selection)
    }
}

cart_intent_method!(CartClient => fn add_to_cart(product: Product, quantity: u32) as CartIntent::Add { product, quantity });
cart_intent_method!(CartClient => fn add_one(product: Product) as CartIntent::add(product, None));
cart_intent_method!(CartClient => fn increase_quantity(product_id: ProductId) as CartIntent::IncreaseQuantity(product_id));
cart_intent_method!(CartClient => fn decrease_quantity(product_id: ProductId) as CartIntent::DecreaseQuantity(product_id));
cart_intent_method!(CartClient => fn remove_from_cart(product_id: ProductId) as CartIntent::RemoveFromCart(product_id));
