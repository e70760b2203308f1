//! Product catalog module.
//!
//! The catalog is a fixed, read-only product list; the cart snapshots
//! whatever it needs from a product at add time.

mod product;

pub use product::{Catalog, Product, DEFAULT_EMOJI};
