//! # Storefront cart
//!
//! The shopping cart of a mobile storefront: an ordered, single-writer store
//! of (product, quantity) entries with observers, hosted on an actor task,
//! plus the checkout handoff that turns a selection of entries into an order.
//!
//! - **Domain types** → [`domain::Product`], [`domain::CartEntry`], [`domain::CartState`]
//! - **Transitions** → [`cart::CartIntent`] applied by [`cart::CartReducer`]
//! - **Store** → [`actor_framework::Store`] (synchronous) and
//!   [`actor_framework::StoreActor`] (the same store on its own task)
//! - **Clients** → [`clients::CartClient`], [`clients::OrderClient`]
//! - **Checkout** → [`checkout::CheckoutRequest`], [`checkout::CheckoutService`]
//! - **System** → [`app_system::StorefrontSystem`], [`app_system::setup_tracing`]
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use storefront_cart::app_system::{StorefrontSystem, SystemConfig};
//! use storefront_cart::domain::Product;
//!
//! let system = StorefrontSystem::new(&SystemConfig::default());
//! system.cart_client.add_to_cart(Product::new(1, "Áo thun", 10_000), 2).await?;
//! let badge = system.cart_client.item_count().await?;
//! # let _ = badge;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod actors;
pub mod app_system;
pub mod cart;
pub mod checkout;
pub mod clients;
pub mod domain;
pub mod error;
pub mod messages;

#[cfg(test)]
mod mock_framework;
