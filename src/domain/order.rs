use std::fmt;

use serde::{Deserialize, Serialize};

use super::product::ProductId;

pub type OrderId = u64;

/// How the shopper pays on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Wallet,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Wallet => "wallet",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Shipping,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: u64,
    pub total_price: u64,
    pub payment_method: PaymentMethod,
    pub address: String,
    pub status: OrderStatus,
}

/// Payload for inserting a new order row. The order book assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub user_id: u64,
    pub total_price: u64,
    pub payment_method: PaymentMethod,
    pub address: String,
}

/// One product line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub qty: u32,
    pub unit_price: u64,
}

impl Order {
    pub fn from_create(id: OrderId, create: OrderCreate) -> Self {
        Self {
            id,
            user_id: create.user_id,
            total_price: create.total_price,
            payment_method: create.payment_method,
            address: create.address,
            status: OrderStatus::Shipping,
        }
    }
}
