use crate::domain::amount::Amount;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::PaymentProcessor;
use crate::error::Result;
use std::io::Write;

/// Simulated card processor.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn process(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Processing ${amount} via Credit Card")?;
        Ok(())
    }
}

/// Simulated PayPal processor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn process(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Processing ${amount} via PayPal")?;
        Ok(())
    }
}

/// Simulated bitcoin processor.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitcoinProcessor;

impl PaymentProcessor for BitcoinProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Bitcoin
    }

    fn process(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Aha! You're using Bitcoin! Processing ${amount} via Bitcoin"
        )?;
        Ok(())
    }
}
