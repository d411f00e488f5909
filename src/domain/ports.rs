use super::amount::Amount;
use super::payment_method::PaymentMethod;
use crate::error::Result;
use std::io::Write;

/// A processor that settles a payment of a given amount.
///
/// Processing is simulated: implementations write a single line describing the
/// transaction to `out`.
pub trait PaymentProcessor: Send + Sync {
    fn method(&self) -> PaymentMethod;
    fn process(&self, amount: Amount, out: &mut dyn Write) -> Result<()>;
}

/// The creator side of the factory method.
///
/// A gateway knows which processor it produces; checkout code only ever talks to
/// the gateway and never names a concrete processor type.
pub trait PaymentGateway: Send + Sync {
    fn create_processor(&self) -> ProcessorBox;

    fn execute_payment(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        let processor = self.create_processor();
        tracing::debug!(method = %processor.method(), %amount, "processor created");
        processor.process(amount, out)
    }
}

pub type ProcessorBox = Box<dyn PaymentProcessor>;
pub type GatewayBox = Box<dyn PaymentGateway>;
pub type GatewayFactory = Box<dyn Fn() -> GatewayBox + Send + Sync>;
