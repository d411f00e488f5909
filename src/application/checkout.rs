use crate::domain::amount::Amount;
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use rust_decimal_macros::dec;
use std::io::Write;

/// The amount charged by every menu checkout.
pub const DEMO_AMOUNT: Amount = Amount::new(dec!(50.00));

/// Runs a checkout against whatever gateway it is handed.
///
/// `Checkout` never names a concrete processor: it asks the gateway to create
/// one and charges it a fixed amount.
#[derive(Debug, Clone, Copy)]
pub struct Checkout {
    amount: Amount,
}

impl Checkout {
    /// Creates a new `Checkout` that charges `amount`.
    pub fn new(amount: Amount) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Executes the payment through `gateway`, writing the processor output to `out`.
    pub fn run(&self, gateway: &dyn PaymentGateway, out: &mut dyn Write) -> Result<()> {
        gateway.execute_payment(self.amount, out)
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(DEMO_AMOUNT)
    }
}
