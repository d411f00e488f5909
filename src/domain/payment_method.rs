use std::fmt;

/// The payment methods the checkout can route to.
///
/// Each method is bound to exactly one processor and one gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    Bitcoin,
}

impl PaymentMethod {
    /// All methods in the order the "test all" checkout runs them.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::Bitcoin,
    ];

    /// Human readable name used in processing messages and gateway headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Bitcoin => "Bitcoin",
        }
    }

    /// Name of the concrete processor type, as shown by the interface check.
    pub fn processor_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "CreditCardProcessor",
            PaymentMethod::PayPal => "PayPalProcessor",
            PaymentMethod::Bitcoin => "BitcoinProcessor",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
