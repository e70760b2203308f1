//! Checkout flow state machine.

use crate::cart::{Cart, CartStore, OrderSummary};
use crate::checkout::{
    generate_order_number, OrderConfirmation, PaymentMethod, ShippingDetails,
};
use crate::error::CheckoutError;
use crate::events::{UiSink, TOAST_DURATION_MS};
use lather_storage::Storage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Simulated payment-processing time before an order completes.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1800);

/// Steps in the checkout flow, numbered 1 to 3 end-to-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Shipping information.
    #[default]
    Shipping,
    /// Payment method.
    Payment,
    /// Review and confirm.
    Review,
}

impl CheckoutStep {
    /// All steps, in order.
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    /// Look up a step by its 1-indexed number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(CheckoutStep::Shipping),
            2 => Some(CheckoutStep::Payment),
            3 => Some(CheckoutStep::Review),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }
}

/// What the review step shows: the shipping details and payment method as
/// entered, plus the order totals, all frozen at the moment step 2 was
/// completed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSnapshot {
    /// Shipping details as entered.
    pub shipping: ShippingDetails,
    /// The payment method in effect.
    pub payment: PaymentMethod,
    /// Order totals for the cart at snapshot time.
    pub summary: OrderSummary,
}

/// The checkout page's state: current step, form data, payment selection,
/// and the review snapshot.
///
/// One flow is created when the user enters checkout and discarded when
/// they navigate away; nothing here is persisted across reloads.
pub struct CheckoutFlow {
    step: CheckoutStep,
    /// Shipping form fields, written directly by the form adapter.
    pub shipping: ShippingDetails,
    payment: Option<PaymentMethod>,
    review: Option<ReviewSnapshot>,
    sink: Box<dyn UiSink>,
    processing_delay: Duration,
}

impl CheckoutFlow {
    /// Start a flow at step 1, without UI callbacks.
    pub fn new() -> Self {
        Self::with_sink(Box::new(()))
    }

    /// Start a flow at step 1 with a presentation sink.
    pub fn with_sink(sink: Box<dyn UiSink>) -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping: ShippingDetails::default(),
            payment: None,
            review: None,
            sink,
            processing_delay: PROCESSING_DELAY,
        }
    }

    /// Override the simulated processing delay (tests use zero).
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// The current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The selected payment method, if the user has picked one.
    pub fn selected_payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    /// The review snapshot, populated on entering step 3.
    pub fn review(&self) -> Option<&ReviewSnapshot> {
        self.review.as_ref()
    }

    /// Record a payment selection. Does not change the step; the last
    /// selection wins.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
    }

    /// Advance to the next step.
    ///
    /// Leaving step 1 requires a complete shipping form; a rejected
    /// transition flags the blank fields through the sink, raises a
    /// warning toast, and leaves the step unchanged. Completing step 2
    /// freezes the review snapshot from the given cart. At step 3 this
    /// is a no-op; placing the order is a separate action.
    pub fn next(&mut self, cart: &Cart) -> Result<CheckoutStep, CheckoutError> {
        match self.step {
            CheckoutStep::Shipping => {
                let missing = self.shipping.missing_fields();
                if !missing.is_empty() {
                    self.sink.validation_failed(&missing);
                    self.sink.toast(
                        "\u{26a0}\u{fe0f} Please fill in all required fields",
                        TOAST_DURATION_MS,
                    );
                    return Err(CheckoutError::IncompleteShipping { missing });
                }
                self.step = CheckoutStep::Payment;
            }
            CheckoutStep::Payment => {
                self.review = Some(ReviewSnapshot {
                    shipping: self.shipping.clone(),
                    payment: self.payment.unwrap_or_default(),
                    summary: OrderSummary::of(cart),
                });
                self.step = CheckoutStep::Review;
            }
            CheckoutStep::Review => {}
        }
        Ok(self.step)
    }

    /// Go back one step; a no-op at step 1.
    pub fn prev(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Shipping => CheckoutStep::Shipping,
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
        };
        self.step
    }

    /// Jump straight to a step without validation. Used by the page for
    /// its initial render; ordinary navigation goes through [`next`] and
    /// [`prev`].
    ///
    /// [`next`]: CheckoutFlow::next
    /// [`prev`]: CheckoutFlow::prev
    pub fn go_to(&mut self, step: CheckoutStep) {
        self.step = step;
    }

    /// Place the order: the terminal action, not a step.
    ///
    /// Blocks for the simulated processing delay, then clears the cart
    /// store, generates an order number, and signals success. Cannot
    /// fail; the presentation layer disables the trigger while this
    /// runs.
    pub fn place_order<S: Storage>(&mut self, cart_store: &mut CartStore<S>) -> OrderConfirmation {
        if !self.processing_delay.is_zero() {
            std::thread::sleep(self.processing_delay);
        }

        cart_store.clear();
        let order_number = generate_order_number();
        info!(%order_number, "order placed");
        self.sink.toast(
            &format!("\u{1f389} Order #{order_number} placed!"),
            TOAST_DURATION_MS,
        );

        OrderConfirmation { order_number }
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
