//! Fundamental types for the Steward keeper-job engine.
//!
//! This crate defines the value types shared by the job engine and its test
//! doubles: account addresses and token amounts. No business logic lives here.

pub mod address;
pub mod amount;

pub use address::Address;
pub use amount::Amount;
