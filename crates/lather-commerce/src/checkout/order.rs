//! Order confirmation types.

use rand::Rng;

/// Prefix on every order number.
pub const ORDER_NUMBER_PREFIX: &str = "LL";

/// Delivery estimate shown on the confirmation screen.
pub const EXPECTED_DELIVERY: &str = "3-5 business days";

/// Receipt handed back once the simulated processing completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Human-readable order number, e.g. "LL482913".
    pub order_number: String,
}

/// Generate an order number: the fixed prefix plus a uniform six-digit
/// number. Cosmetic only; nothing checks these for uniqueness.
pub fn generate_order_number() -> String {
    let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("{ORDER_NUMBER_PREFIX}{n}")
}
