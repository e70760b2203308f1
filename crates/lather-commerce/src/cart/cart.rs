//! Cart and line item types.

use crate::catalog::{Product, DEFAULT_EMOJI};
use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// One line in the cart: a product snapshot plus quantity.
///
/// Name, category label, and both prices are captured at add time; later
/// catalog changes do not retroactively reprice items already in the cart.
/// Serialized field names stay camelCase so the stored cart keeps the
/// storefront's original wire schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier; unique within the cart.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Category display label at add time.
    pub category: String,
    /// Unit price at add time.
    pub price: Rupees,
    /// Pre-discount unit price at add time.
    pub original_price: Rupees,
    /// Image path, if the product had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Emoji fallback glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Quantity; always at least 1.
    pub quantity: i64,
}

impl CartItem {
    /// Snapshot a product into a line item.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category_label.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            emoji: product.emoji.clone(),
            quantity,
        }
    }

    /// Total for this line (unit price times quantity).
    pub fn line_total(&self) -> Rupees {
        self.price * self.quantity
    }

    /// The emoji to render for this line, falling back to the default.
    pub fn glyph(&self) -> &str {
        self.emoji.as_deref().unwrap_or(DEFAULT_EMOJI)
    }
}

/// The cart: an insertion-ordered list of line items.
///
/// Serializes as a bare JSON array, matching the persisted layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (the "2 items" header on the cart page).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total item count (sum of quantities; the badge number).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> Rupees {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of pre-discount price times quantity over all lines.
    pub fn original_subtotal(&self) -> Rupees {
        self.items.iter().map(|i| i.original_price * i.quantity).sum()
    }

    /// Add `quantity` of a product.
    ///
    /// An id already in the cart has its quantity incremented; an
    /// increment that would drive the quantity to zero or below removes
    /// the line instead, the same path as [`Cart::set_quantity`] with 0.
    /// Adding a brand-new item with quantity below 1 is a no-op.
    ///
    /// Returns `false` only for the no-op case.
    pub fn add(&mut self, product: &Product, quantity: i64) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.id == product.id) {
            let new_quantity = self.items[pos].quantity + quantity;
            if new_quantity <= 0 {
                self.items.remove(pos);
            } else {
                self.items[pos].quantity = new_quantity;
            }
            true
        } else if quantity >= 1 {
            self.items.push(CartItem::from_product(product, quantity));
            true
        } else {
            false
        }
    }

    /// Remove a line by product id. Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < before
    }

    /// Set a line's quantity; zero or below removes the line entirely.
    ///
    /// Returns `false` when the id is absent (and the quantity was
    /// positive), so callers can skip persisting an unchanged cart.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn soap(id: u32, price: i64, original: i64) -> Product {
        Product::new(id, format!("Soap {id}"), "herbal", "Herbal Soaps", price, original)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Rupees::ZERO);
    }

    #[test]
    fn test_add_new_item_snapshots_product() {
        let mut cart = Cart::new();
        assert!(cart.add(&soap(1, 349, 449), 2));

        let item = cart.get(ProductId(1)).unwrap();
        assert_eq!(item.name, "Soap 1");
        assert_eq!(item.category, "Herbal Soaps");
        assert_eq!(item.price, Rupees(349));
        assert_eq!(item.original_price, Rupees(449));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total(), Rupees(698));
    }

    #[test]
    fn test_add_existing_increments_only_that_line() {
        let mut cart = Cart::new();
        cart.add(&soap(1, 349, 449), 1);
        cart.add(&soap(2, 279, 349), 3);
        cart.add(&soap(1, 349, 449), 2);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, 3);
        assert_eq!(cart.get(ProductId(2)).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_negative_increment_routes_to_removal() {
        let mut cart = Cart::new();
        cart.add(&soap(1, 349, 449), 2);
        assert!(cart.add(&soap(1, 349, 449), -2));
        assert!(cart.get(ProductId(1)).is_none());
    }

    #[test]
    fn test_add_new_item_below_one_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.add(&soap(1, 349, 449), 0));
        assert!(!cart.add(&soap(1, 349, 449), -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let product = soap(1, 349, 449);

        let mut via_set = Cart::new();
        via_set.add(&product, 2);
        via_set.set_quantity(ProductId(1), 0);

        let mut via_remove = Cart::new();
        via_remove.add(&product, 2);
        via_remove.remove(ProductId(1));

        assert_eq!(via_set, via_remove);
        assert!(via_set.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_id() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ProductId(42), 5));
    }

    #[test]
    fn test_counts_and_totals() {
        let mut cart = Cart::new();
        cart.add(&soap(1, 349, 449), 2);
        cart.add(&soap(2, 279, 349), 1);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.subtotal(), Rupees(977));
        assert_eq!(cart.original_subtotal(), Rupees(1_247));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&soap(3, 100, 100), 1);
        cart.add(&soap(1, 100, 100), 1);
        cart.add(&soap(2, 100, 100), 1);

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
