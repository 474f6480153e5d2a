//! Nullable collaborators for deterministic testing.
//!
//! The job engine reaches its external world (keeper registry, strategies,
//! code-presence probe) through the traits in `steward-job`. This crate
//! provides test-friendly implementations that:
//! - return programmed responses,
//! - record every call with its arguments,
//! - share one chronological log so cross-collaborator ordering
//!   (e.g. `worked` strictly after `rebalance`) can be asserted.
//!
//! Usage: build a [`NullEnvironment`], bind a registry and strategies to
//! addresses, and hand it to the job operations.

pub mod env;
pub mod log;
pub mod registry;
pub mod strategy;

pub use env::NullEnvironment;
pub use log::CallLog;
pub use registry::{NullRegistry, RegistryCall};
pub use strategy::NullStrategy;
