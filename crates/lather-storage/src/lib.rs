//! Local key-value persistence for LatherLux.
//!
//! The storefront keeps its state (cart, theme preference) in a small
//! string key/value store, the way a browser keeps it in local storage.
//! This crate provides:
//!
//! - [`Storage`]: the key/value contract (string keys, string values)
//! - [`MemoryStorage`]: shared in-memory store; clones are handles onto
//!   the same underlying map
//! - [`FileStorage`]: a single JSON file on disk holding the whole map
//! - [`KvStore`]: typed wrapper with automatic JSON (de)serialization
//!
//! # Example
//!
//! ```rust,ignore
//! let storage = MemoryStorage::new();
//! let kv = KvStore::new(storage.clone());
//! kv.set("latherlux_cart", &cart)?;
//! let cart: Option<Cart> = kv.get("latherlux_cart")?;
//! ```

pub mod error;
pub mod kv;
pub mod store;

pub use error::StorageError;
pub use kv::KvStore;
pub use store::{FileStorage, MemoryStorage, Storage};
