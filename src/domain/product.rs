use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
pub type ProductId = u64;

/// A product as read from the catalog.
///
/// The cart keeps its own copy of this value; later catalog changes are not
/// reflected in entries that were already added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub img: String,
    pub detail: String,
    /// Unit price in đồng.
    pub price: u64,
    pub rating: Option<f32>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            img: String::new(),
            detail: String::new(),
            price,
            rating: None,
        }
    }

    pub fn with_image(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}
