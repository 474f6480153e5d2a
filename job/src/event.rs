//! Emitted-event log.

use serde::{Deserialize, Serialize};
use steward_types::{Address, Amount};

/// An event emitted by a committed job operation.
///
/// Events accumulate on the job in operation order and are drained by the
/// host after each call. A rejected operation emits nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobEvent {
    PauseChanged {
        paused: bool,
    },
    RegistrySet {
        registry: Address,
    },
    RequirementsSet {
        bond: Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
        eoa_only: bool,
    },
    StrategyAdded {
        strategy: Address,
    },
    StrategyRevoked {
        strategy: Address,
    },
    GovernorProposed {
        pending: Address,
    },
    GovernorAccepted {
        governor: Address,
    },
}
