use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::{GatewayBox, GatewayFactory, PaymentGateway, ProcessorBox};
use crate::infrastructure::processors::{BitcoinProcessor, CreditCardProcessor, PayPalProcessor};

/// Gateway that creates `CreditCardProcessor`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardGateway;

impl PaymentGateway for CreditCardGateway {
    fn create_processor(&self) -> ProcessorBox {
        Box::new(CreditCardProcessor)
    }
}

/// Gateway that creates `PayPalProcessor`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalGateway;

impl PaymentGateway for PayPalGateway {
    fn create_processor(&self) -> ProcessorBox {
        Box::new(PayPalProcessor)
    }
}

/// Gateway that creates `BitcoinProcessor`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitcoinGateway;

impl PaymentGateway for BitcoinGateway {
    fn create_processor(&self) -> ProcessorBox {
        Box::new(BitcoinProcessor)
    }
}

/// Returns a fresh gateway bound to `method`.
pub fn gateway_for(method: PaymentMethod) -> GatewayBox {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardGateway),
        PaymentMethod::PayPal => Box::new(PayPalGateway),
        PaymentMethod::Bitcoin => Box::new(BitcoinGateway),
    }
}

/// Returns a factory closure that builds gateways for `method` on demand.
pub fn gateway_factory(method: PaymentMethod) -> GatewayFactory {
    Box::new(move || gateway_for(method))
}

/// Returns a fresh processor for `method`, bypassing checkout.
///
/// Used by the menu's interface check, which inspects a standalone processor.
pub fn processor_for(method: PaymentMethod) -> ProcessorBox {
    gateway_for(method).create_processor()
}
