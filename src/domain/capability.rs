//! Structural capability checks.
//!
//! Trait bounds already guarantee at compile time that every `PaymentProcessor`
//! can `process`. This module keeps a runtime presence check for display in the
//! menu: an object lists the operations it exposes and a shape lists the
//! operations it requires.

use super::ports::PaymentProcessor;

/// A named set of operations an object is expected to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceShape {
    pub name: &'static str,
    pub operations: &'static [&'static str],
}

pub const PAYMENT_PROCESSOR: InterfaceShape = InterfaceShape {
    name: "PaymentProcessor",
    operations: &["process"],
};

/// Objects that can report which operations they expose.
pub trait Inspectable {
    fn type_name(&self) -> &'static str;
    fn operations(&self) -> &'static [&'static str];
}

impl<T: PaymentProcessor + ?Sized> Inspectable for T {
    fn type_name(&self) -> &'static str {
        self.method().processor_name()
    }

    fn operations(&self) -> &'static [&'static str] {
        PAYMENT_PROCESSOR.operations
    }
}

/// Returns true when `instance` exposes every operation named by `shape`.
///
/// Only presence is checked, not signatures or behavior.
pub fn implements_interface<T: Inspectable + ?Sized>(instance: &T, shape: &InterfaceShape) -> bool {
    let exposed = instance.operations();
    shape.operations.iter().all(|op| exposed.contains(op))
}
