//! Payment method selection.

use serde::{Deserialize, Serialize};

/// Payment options offered at checkout step 2.
///
/// Exactly one method is selected at a time; the presentation layer
/// pre-selects the first option before any interaction, which is also
/// the `Default` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// UPI transfer.
    Upi,
    /// Cash on delivery.
    CashOnDelivery,
}

impl PaymentMethod {
    /// All options, in display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::CashOnDelivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "card" => Some(PaymentMethod::Card),
            "upi" => Some(PaymentMethod::Upi),
            "cod" => Some(PaymentMethod::CashOnDelivery),
            _ => None,
        }
    }

    /// Whether the card-number form fields should be shown.
    pub fn requires_card_details(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}
