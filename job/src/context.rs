//! Per-invocation call context.

use serde::{Deserialize, Serialize};
use steward_types::Address;

/// The identity of the account making the current call.
///
/// Every externally reachable operation receives one; access checks and the
/// keeper validation read the caller from here rather than from ambient
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub caller: Address,
}

impl CallContext {
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}

impl From<Address> for CallContext {
    fn from(caller: Address) -> Self {
        Self { caller }
    }
}
