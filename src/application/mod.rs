//! Application layer containing the checkout orchestration.
//!
//! This module defines `Checkout`, which drives a payment through any
//! `PaymentGateway` without depending on concrete processor types.

pub mod checkout;
