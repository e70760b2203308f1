//! Order summary calculation.

use crate::cart::Cart;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Subtotal at or above which delivery is free.
pub const FREE_DELIVERY_THRESHOLD: Rupees = Rupees(500);

/// Flat delivery fee below the free-delivery threshold.
pub const DELIVERY_FEE: Rupees = Rupees(60);

/// The derived price breakdown shown beside the cart and at checkout.
///
/// Never persisted; recomputed from the current cart on every read, and
/// deterministic for a given cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderSummary {
    /// Sum of price times quantity.
    pub subtotal: Rupees,
    /// Delivery charge after the free-shipping rule.
    pub delivery_fee: Rupees,
    /// Total discount versus original prices.
    pub savings: Rupees,
    /// Amount payable.
    pub total: Rupees,
}

impl OrderSummary {
    /// Compute the summary for a cart snapshot.
    ///
    /// An empty cart owes nothing: no subtotal, no delivery fee.
    pub fn of(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self::default();
        }

        let subtotal = cart.subtotal();
        let delivery_fee = if subtotal >= FREE_DELIVERY_THRESHOLD {
            Rupees::ZERO
        } else {
            DELIVERY_FEE
        };
        let savings = (cart.original_subtotal() - subtotal).max(Rupees::ZERO);

        Self {
            subtotal,
            delivery_fee,
            savings,
            total: subtotal + delivery_fee,
        }
    }

    /// Whether the order qualified for free delivery.
    pub fn free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }

    /// Whether there are discounts worth calling out.
    pub fn has_savings(&self) -> bool {
        self.savings > Rupees::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn cart_with(price: i64, original: i64, quantity: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add(
            &Product::new(1, "Bar", "herbal", "Herbal Soaps", price, original),
            quantity,
        );
        cart
    }

    #[test]
    fn test_empty_cart_owes_nothing() {
        let summary = OrderSummary::of(&Cart::new());
        assert_eq!(summary.subtotal, Rupees::ZERO);
        assert_eq!(summary.delivery_fee, Rupees::ZERO);
        assert_eq!(summary.total, Rupees::ZERO);
    }

    #[test]
    fn test_delivery_fee_below_threshold() {
        let summary = OrderSummary::of(&cart_with(499, 499, 1));
        assert_eq!(summary.delivery_fee, DELIVERY_FEE);
        assert_eq!(summary.total, Rupees(559));
        assert!(!summary.free_delivery());
    }

    #[test]
    fn test_free_delivery_at_threshold() {
        let summary = OrderSummary::of(&cart_with(500, 500, 1));
        assert_eq!(summary.delivery_fee, Rupees::ZERO);
        assert_eq!(summary.total, Rupees(500));
        assert!(summary.free_delivery());
    }

    #[test]
    fn test_savings_from_discounted_prices() {
        let summary = OrderSummary::of(&cart_with(349, 449, 2));
        assert_eq!(summary.savings, Rupees(200));
        assert!(summary.has_savings());
    }

    #[test]
    fn test_savings_never_negative() {
        // Price somehow above the original: report zero, not negative
        let summary = OrderSummary::of(&cart_with(500, 400, 1));
        assert_eq!(summary.savings, Rupees::ZERO);
        assert!(!summary.has_savings());
    }

    #[test]
    fn test_deterministic_for_same_snapshot() {
        let cart = cart_with(349, 449, 3);
        assert_eq!(OrderSummary::of(&cart), OrderSummary::of(&cart));
    }
}
