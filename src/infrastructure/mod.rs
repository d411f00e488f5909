//! Concrete processors and the gateways that create them.

pub mod gateways;
pub mod processors;
