//! Domain layer: payment methods, amounts, and the processor/gateway ports.

pub mod amount;
pub mod capability;
pub mod payment_method;
pub mod ports;
pub mod selection;
