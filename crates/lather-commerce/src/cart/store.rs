//! The persisted cart store.

use crate::cart::{Cart, OrderSummary};
use crate::catalog::Catalog;
use crate::events::{UiSink, TOAST_DURATION_MS};
use crate::ids::ProductId;
use crate::money::Rupees;
use lather_storage::{KvStore, Storage};
use tracing::{debug, warn};

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "latherlux_cart";

/// The authoritative cart: reads and mutates the persisted line items and
/// notifies the UI after every persist.
///
/// Degradation policy: a missing or unreadable stored cart reads as empty,
/// an unknown product id is a silent no-op, and a failed persist drops the
/// mutation with a warning. Nothing here can fail the storefront.
pub struct CartStore<S: Storage> {
    kv: KvStore<S>,
    sink: Box<dyn UiSink>,
}

impl<S: Storage> CartStore<S> {
    /// Open the cart store over a storage backend, without UI callbacks.
    pub fn new(storage: S) -> Self {
        Self::with_sink(storage, Box::new(()))
    }

    /// Open the cart store with a presentation sink.
    pub fn with_sink(storage: S, sink: Box<dyn UiSink>) -> Self {
        Self {
            kv: KvStore::new(storage),
            sink,
        }
    }

    /// Read the current cart. Absent or unreadable state is an empty cart.
    pub fn cart(&self) -> Cart {
        match self.kv.get::<Cart>(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "stored cart unreadable, treating as empty");
                Cart::new()
            }
        }
    }

    /// Add `quantity` of the product with the given id.
    ///
    /// Unknown ids are ignored. The product snapshot (name, category
    /// label, prices, image, emoji) is captured now, not re-read later.
    pub fn add_item(&mut self, catalog: &Catalog, id: ProductId, quantity: i64) {
        let Some(product) = catalog.get(id) else {
            return;
        };

        let mut cart = self.cart();
        if !cart.add(product, quantity) {
            return;
        }
        self.persist(&cart);

        // A negative increment may have removed the line instead
        if cart.get(id).is_some() {
            self.sink.toast(
                &format!("\u{1f6d2} \"{}\" added to cart!", product.name),
                TOAST_DURATION_MS,
            );
        }
    }

    /// Remove the line with the given id. Persists either way, as the
    /// cart page's remove control always rewrites the stored cart.
    pub fn remove_item(&mut self, id: ProductId) {
        let mut cart = self.cart();
        cart.remove(id);
        self.persist(&cart);
    }

    /// Set a line's quantity; zero or below removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let mut cart = self.cart();
        if cart.set_quantity(id, quantity) {
            self.persist(&cart);
        }
    }

    /// Delete the persisted cart entirely.
    pub fn clear(&mut self) {
        match self.kv.remove(CART_KEY) {
            Ok(()) => self.sink.cart_count_changed(0),
            Err(e) => warn!(error = %e, "failed to clear cart"),
        }
    }

    /// Sum of price times quantity over the whole cart.
    pub fn total(&self) -> Rupees {
        self.cart().subtotal()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.cart().item_count()
    }

    /// Order summary for the current cart.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::of(&self.cart())
    }

    fn persist(&self, cart: &Cart) {
        match self.kv.set(CART_KEY, cart) {
            Ok(()) => {
                debug!(lines = cart.line_count(), "cart persisted");
                self.sink.cart_count_changed(cart.item_count());
            }
            Err(e) => warn!(error = %e, "cart persist failed, mutation dropped"),
        }
    }
}
