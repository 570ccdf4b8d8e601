use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Product;

/// In-memory product catalog. Insertion order is the canonical listing order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

/// On-disk shape accepted by `Catalog::from_file`.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: i64,
    category: String,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads the catalog from a JSON array of seed products.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog file {}", path.display()))?;
        let seeds: Vec<SeedProduct> =
            serde_json::from_str(&raw).with_context(|| "parsing catalog file")?;
        Ok(Self::new(seeds.into_iter().map(product_from_seed).collect()))
    }

    /// Built-in storefront stock used when no catalog file is configured.
    pub fn with_default_stock() -> Self {
        let seeds = [
            ("Kayak", "A boat for one person", 27500, "Watersports"),
            ("Lifejacket", "Protective and fashionable", 4895, "Watersports"),
            ("Soccer Ball", "FIFA-approved size and weight", 1950, "Soccer"),
            (
                "Corner Flags",
                "Give your playing field a professional touch",
                3495,
                "Soccer",
            ),
            ("Stadium", "Flat-packed 35,000-seat stadium", 7950000, "Soccer"),
            ("Thinking Cap", "Improve brain efficiency by 75%", 1600, "Chess"),
            (
                "Unsteady Chair",
                "Secretly give your opponent a disadvantage",
                2995,
                "Chess",
            ),
            (
                "Human Chess Board",
                "A fun game for the family",
                7500,
                "Chess",
            ),
            ("Bling-Bling King", "Gold-plated, diamond-studded King", 120000, "Chess"),
        ];
        let products = seeds
            .into_iter()
            .map(|(name, description, price, category)| {
                product_from_seed(SeedProduct {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    price,
                    category: category.to_string(),
                })
            })
            .collect();
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category names, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

fn product_from_seed(seed: SeedProduct) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: seed.name,
        description: seed.description,
        price: seed.price,
        category: seed.category,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stock_is_populated() {
        let catalog = Catalog::with_default_stock();
        assert!(!catalog.is_empty());
        assert!(catalog.products().iter().any(|p| p.name == "Kayak"));
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = Catalog::with_default_stock();
        let categories = catalog.categories();
        assert_eq!(categories, vec!["Chess", "Soccer", "Watersports"]);
    }

    #[test]
    fn find_returns_seeded_product() {
        let catalog = Catalog::with_default_stock();
        let kayak = catalog
            .products()
            .iter()
            .find(|p| p.name == "Kayak")
            .cloned()
            .expect("kayak in default stock");
        assert_eq!(catalog.find(kayak.id), Some(&kayak));
        assert_eq!(catalog.find(Uuid::new_v4()), None);
    }
}
