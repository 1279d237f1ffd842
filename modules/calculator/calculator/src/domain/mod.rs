//! Domain layer for calculator module
//!
//! Contains operand coercion and the evaluation contract.

pub mod operand;
pub mod service;

pub use service::{Service, evaluate};

#[cfg(test)]
mod service_test;
