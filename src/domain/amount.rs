use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Represents a monetary amount handed to a payment processor.
///
/// This is a wrapper around `rust_decimal::Decimal` so that amounts are never
/// subject to floating point rounding. It always displays with two decimal places.
/// Negative values are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{cents:.2}")
    }
}
