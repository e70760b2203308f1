//! Storefront domain types and logic for LatherLux.
//!
//! This crate is the core of a small client-side storefront:
//!
//! - **Catalog**: the fixed product list the storefront sells from
//! - **Cart**: a persisted shopping cart with line items and derived totals
//! - **Pricing**: pure order-summary computation with free-delivery rules
//! - **Checkout**: the three-step shipping/payment/review flow and order
//!   placement
//!
//! Rendering lives elsewhere; the core signals the presentation layer
//! through the [`UiSink`] seam and persists through any
//! [`lather_storage::Storage`] backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use lather_commerce::prelude::*;
//! use lather_storage::MemoryStorage;
//!
//! let catalog = Catalog::new(products);
//! let mut cart = CartStore::new(MemoryStorage::new());
//! cart.add_item(&catalog, ProductId(1), 2);
//!
//! let summary = cart.summary();
//! println!("Total: {}", summary.total);
//!
//! let mut checkout = CheckoutFlow::new();
//! checkout.shipping.name = "Asha Rao".to_string();
//! // ... fill remaining fields, then:
//! checkout.next(&cart.cart())?;
//! ```

pub mod error;
pub mod events;
pub mod ids;
pub mod money;
pub mod theme;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::CheckoutError;
pub use events::{UiSink, TOAST_DURATION_MS};
pub use ids::ProductId;
pub use money::Rupees;
pub use theme::Theme;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CheckoutError;
    pub use crate::events::{UiSink, TOAST_DURATION_MS};
    pub use crate::ids::ProductId;
    pub use crate::money::Rupees;
    pub use crate::theme::Theme;

    // Catalog
    pub use crate::catalog::{Catalog, Product, DEFAULT_EMOJI};

    // Cart
    pub use crate::cart::{
        coupon, Cart, CartItem, CartStore, CouponCheck, OrderSummary, CART_KEY, DELIVERY_FEE,
        FREE_DELIVERY_THRESHOLD,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, OrderConfirmation, PaymentMethod, ReviewSnapshot,
        ShippingDetails, ShippingField, EXPECTED_DELIVERY, ORDER_NUMBER_PREFIX, PROCESSING_DELAY,
    };
}
