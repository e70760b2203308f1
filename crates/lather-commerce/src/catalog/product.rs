//! Product and catalog types.

use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Fallback glyph for products without their own emoji.
pub const DEFAULT_EMOJI: &str = "\u{1f9fc}";

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category slug used for filtering (e.g., "rose").
    pub category: String,
    /// Category display label (e.g., "Rose Soaps").
    pub category_label: String,
    /// Current unit price.
    pub price: Rupees,
    /// Pre-discount unit price.
    pub original_price: Rupees,
    /// Average rating (0.0 to 5.0).
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Image path, if the product has one.
    pub image: Option<String>,
    /// Full description.
    pub description: String,
    /// Short description for listings.
    pub short_desc: String,
    /// Ingredient names.
    pub ingredients: Vec<String>,
    /// Scent notes.
    pub scents: Vec<String>,
    /// Bar weight (e.g., "100g").
    pub weight: String,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Show the "New" badge.
    pub is_new: bool,
    /// Show the "Bestseller" badge.
    pub is_bestseller: bool,
    /// Emoji shown when no image is available.
    pub emoji: Option<String>,
}

impl Product {
    /// Create a product with the given identity and pricing; the
    /// remaining fields start empty and are filled in directly.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        category_label: impl Into<String>,
        price: i64,
        original_price: i64,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category: category.into(),
            category_label: category_label.into(),
            price: Rupees(price),
            original_price: Rupees(original_price),
            rating: 0.0,
            reviews: 0,
            image: None,
            description: String::new(),
            short_desc: String::new(),
            ingredients: Vec::new(),
            scents: Vec::new(),
            weight: String::new(),
            in_stock: true,
            is_new: false,
            is_bestseller: false,
            emoji: None,
        }
    }

    /// Discount off the original price, as a rounded whole percentage.
    pub fn discount_percent(&self) -> u8 {
        if self.original_price.0 <= 0 {
            return 0;
        }
        let off = (self.original_price.0 - self.price.0) as f64;
        ((off / self.original_price.0 as f64) * 100.0).round() as u8
    }

    /// The emoji to render for this product, falling back to the default.
    pub fn glyph(&self) -> &str {
        self.emoji.as_deref().unwrap_or(DEFAULT_EMOJI)
    }
}

/// The storefront's fixed product list, looked up by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Iterate products in the given category slug.
    pub fn in_category<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == slug)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose_soap() -> Product {
        let mut p = Product::new(1, "Rose Garden Bliss", "rose", "Rose Soaps", 349, 449);
        p.rating = 4.8;
        p.reviews = 124;
        p.is_bestseller = true;
        p
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![rose_soap()]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(ProductId(1)).is_some());
        assert!(catalog.get(ProductId(99)).is_none());
    }

    #[test]
    fn test_category_filter() {
        let mut lavender = Product::new(2, "Lavender Dreams", "lavender", "Lavender Soaps", 329, 399);
        lavender.is_bestseller = true;
        let catalog = Catalog::new(vec![rose_soap(), lavender]);

        let rose: Vec<_> = catalog.in_category("rose").collect();
        assert_eq!(rose.len(), 1);
        assert_eq!(rose[0].name, "Rose Garden Bliss");
    }

    #[test]
    fn test_discount_percent() {
        // (449 - 349) / 449 = 22.27% -> 22
        assert_eq!(rose_soap().discount_percent(), 22);

        let full_price = Product::new(3, "Plain Bar", "herbal", "Herbal Soaps", 100, 100);
        assert_eq!(full_price.discount_percent(), 0);
    }

    #[test]
    fn test_glyph_fallback() {
        let mut p = rose_soap();
        assert_eq!(p.glyph(), DEFAULT_EMOJI);
        p.emoji = Some("\u{1f339}".to_string());
        assert_eq!(p.glyph(), "\u{1f339}");
    }
}
