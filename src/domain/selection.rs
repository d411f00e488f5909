use super::payment_method::PaymentMethod;

/// A menu choice, derived from one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    CreditCard,
    PayPal,
    Bitcoin,
    All,
    Exit,
    Invalid,
}

impl MenuSelection {
    /// Parses raw input. Surrounding whitespace is ignored; anything that is not
    /// an exact option number is `Invalid`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => MenuSelection::CreditCard,
            "2" => MenuSelection::PayPal,
            "3" => MenuSelection::Bitcoin,
            "4" => MenuSelection::All,
            "0" => MenuSelection::Exit,
            _ => MenuSelection::Invalid,
        }
    }

    /// The checkouts this selection runs, in order.
    pub fn checkouts(&self) -> &'static [PaymentMethod] {
        match self {
            MenuSelection::CreditCard => &[PaymentMethod::CreditCard],
            MenuSelection::PayPal => &[PaymentMethod::PayPal],
            MenuSelection::Bitcoin => &[PaymentMethod::Bitcoin],
            MenuSelection::All => &PaymentMethod::ALL,
            MenuSelection::Exit | MenuSelection::Invalid => &[],
        }
    }

    /// The processor whose interface is checked after the checkouts, if any.
    pub fn interface_check(&self) -> Option<PaymentMethod> {
        match self {
            MenuSelection::CreditCard | MenuSelection::All => Some(PaymentMethod::CreditCard),
            MenuSelection::PayPal => Some(PaymentMethod::PayPal),
            MenuSelection::Bitcoin => Some(PaymentMethod::Bitcoin),
            MenuSelection::Exit | MenuSelection::Invalid => None,
        }
    }
}

impl From<&str> for MenuSelection {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
