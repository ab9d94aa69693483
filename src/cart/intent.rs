use crate::domain::{Product, ProductId};

/// Everything that can change the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Adds `quantity` units of `product`, merging with an existing entry.
    Add { product: Product, quantity: u32 },
    IncreaseQuantity(ProductId),
    /// Removes the entry instead of dropping its quantity to zero.
    DecreaseQuantity(ProductId),
    RemoveFromCart(ProductId),
}

impl CartIntent {
    pub fn add(product: Product, quantity: Option<u32>) -> Self {
        CartIntent::Add {
            product,
            quantity: quantity.unwrap_or(1),
        }
    }
}
