//! Checkout error types.

use crate::checkout::ShippingField;
use thiserror::Error;

/// Errors that can occur while driving the checkout flow.
///
/// Everything here is recoverable: the flow stays on its current step and
/// the user corrects the input and retries. Cart operations never error at
/// all; unknown ids and unreadable storage degrade to no-ops.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    /// Step 1 cannot be left while required shipping fields are blank.
    #[error("Shipping details incomplete: missing {}", .missing.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))]
    IncompleteShipping {
        /// The fields that were empty after trimming.
        missing: Vec<ShippingField>,
    },
}
