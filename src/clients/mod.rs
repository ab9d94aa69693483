#[macro_use]
mod macros;

pub mod cart_client;
pub mod order_client;

pub use cart_client::CartClient;
pub use order_client::OrderClient;
