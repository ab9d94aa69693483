use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// One product in the cart together with how many units the shopper wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity, in đồng.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart contents in the order products were first added.
///
/// Holds at most one entry per product id and never an entry with a
/// quantity of zero. Only the cart reducer builds new states.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub(crate) items: Vec<CartEntry>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartEntry] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.items.iter().find(|entry| entry.product_id() == product_id)
    }

    /// Number of distinct products in the cart. This is what the cart badge
    /// shows; see [`CartState::total_units`] for the number of units.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|entry| u64::from(entry.quantity)).sum()
    }

    /// Entries whose product id is in `selection`, in cart order.
    pub fn selected_entries(&self, selection: &[ProductId]) -> Vec<CartEntry> {
        self.items
            .iter()
            .filter(|entry| selection.contains(&entry.product_id()))
            .cloned()
            .collect()
    }

    /// Sum of the line totals of the selected entries. Ids that are not in
    /// the cart contribute nothing.
    pub fn selected_total(&self, selection: &[ProductId]) -> u64 {
        self.items
            .iter()
            .filter(|entry| selection.contains(&entry.product_id()))
            .fold(0u64, |total, entry| total.saturating_add(entry.line_total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart(entries: Vec<CartEntry>) -> CartState {
        CartState { items: entries }
    }

    #[test]
    fn test_line_total_multiplies_price_by_quantity() {
        let entry = CartEntry::new(Product::new(1, "Áo thun", 10_000), 3);
        assert_eq!(entry.line_total(), 30_000);
    }

    #[test]
    fn test_item_count_counts_distinct_products() {
        let state = cart(vec![
            CartEntry::new(Product::new(1, "A", 10_000), 5),
            CartEntry::new(Product::new(2, "B", 5_000), 2),
        ]);
        assert_eq!(state.item_count(), 2);
        assert_eq!(state.total_units(), 7);
    }

    #[test]
    fn test_selected_total_only_counts_selection() {
        let state = cart(vec![
            CartEntry::new(Product::new(1, "A", 10_000), 2),
            CartEntry::new(Product::new(2, "B", 5_000), 2),
            CartEntry::new(Product::new(3, "C", 1_000), 1),
        ]);
        assert_eq!(state.selected_total(&[1, 2]), 30_000);
        assert_eq!(state.selected_total(&[3]), 1_000);
        assert_eq!(state.selected_total(&[]), 0);
        // Unknown ids and repeated ids do not change the total.
        assert_eq!(state.selected_total(&[2, 2, 99]), 10_000);
    }

    #[test]
    fn test_selected_entries_keep_cart_order() {
        let state = cart(vec![
            CartEntry::new(Product::new(1, "A", 10_000), 2),
            CartEntry::new(Product::new(2, "B", 5_000), 2),
            CartEntry::new(Product::new(3, "C", 1_000), 1),
        ]);
        let ids: Vec<ProductId> = state
            .selected_entries(&[3, 1])
            .iter()
            .map(CartEntry::product_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
