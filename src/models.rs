use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Price in minor currency units.
    pub price: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
}

/// Insertion-ordered collection of cart lines, unique by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Merges the quantity into an existing line for the same product, or
    /// appends a new line at the end.
    pub fn add_item(&mut self, product: Product, quantity: i32) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Removes the line for the given product. Removing a product that is
    /// not in the cart is a no-op.
    pub fn remove_line(&mut self, product_id: Uuid) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| l.product.price * i64::from(l.quantity))
            .sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Page metadata for list rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingInfo {
    pub current_page: i64,
    pub items_per_page: i64,
    pub total_items: i64,
}

impl PagingInfo {
    pub fn new(current_page: i64, items_per_page: i64, total_items: i64) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.items_per_page <= 0 {
            return 0;
        }
        (self.total_items + self.items_per_page - 1) / self.items_per_page
    }
}
