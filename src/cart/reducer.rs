use tracing::{debug, warn};

use super::intent::CartIntent;
use crate::actor_framework::Reducer;
use crate::domain::{CartEntry, CartState, ProductId};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: CartState, intent: CartIntent) -> (CartState, bool) {
        let changed = match intent {
            CartIntent::Add { product, quantity } => {
                if quantity == 0 {
                    warn!(product_id = product.id, "Ignoring add with zero quantity");
                    return (state, false);
                }
                match position(&state, product.id) {
                    Some(index) => {
                        let entry = &mut state.items[index];
                        let before = entry.quantity;
                        entry.quantity = entry.quantity.saturating_add(quantity);
                        debug!(product_id = product.id, quantity = entry.quantity, "Merged into cart entry");
                        entry.quantity != before
                    }
                    None => {
                        debug!(product_id = product.id, quantity, "Appended cart entry");
                        state.items.push(CartEntry::new(product, quantity));
                        true
                    }
                }
            }
            CartIntent::IncreaseQuantity(product_id) => match position(&state, product_id) {
                Some(index) => {
                    let entry = &mut state.items[index];
                    let before = entry.quantity;
                    entry.quantity = entry.quantity.saturating_add(1);
                    debug!(product_id, quantity = entry.quantity, "Increased quantity");
                    entry.quantity != before
                }
                None => false,
            },
            CartIntent::DecreaseQuantity(product_id) => match position(&state, product_id) {
                Some(index) => {
                    if state.items[index].quantity > 1 {
                        state.items[index].quantity -= 1;
                        debug!(product_id, quantity = state.items[index].quantity, "Decreased quantity");
                    } else {
                        state.items.remove(index);
                        debug!(product_id, "Removed cart entry at quantity 1");
                    }
                    true
                }
                None => false,
            },
            CartIntent::RemoveFromCart(product_id) => match position(&state, product_id) {
                Some(index) => {
                    state.items.remove(index);
                    debug!(product_id, "Removed cart entry");
                    true
                }
                None => false,
            },
        };
        (state, changed)
    }
}

fn position(state: &CartState, product_id: ProductId) -> Option<usize> {
    state.items.iter().position(|entry| entry.product_id() == product_id)
}
