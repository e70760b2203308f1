//! Shopping cart module.
//!
//! [`Cart`] holds the line items and their pure operations;
//! [`CartStore`] layers persistence and UI notification on top.

mod cart;
pub mod coupon;
mod pricing;
mod store;

pub use cart::{Cart, CartItem};
pub use coupon::CouponCheck;
pub use pricing::{OrderSummary, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};
pub use store::{CartStore, CART_KEY};
