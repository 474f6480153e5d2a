use steward_types::Address;
use thiserror::Error;

/// Every way a job operation can be rejected.
///
/// All rejections are synchronous and leave the job state untouched:
/// operations check their preconditions before their first mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JobError {
    #[error("caller {caller} is not authorized")]
    Unauthorized { caller: Address },

    #[error("pause flag is already {paused}")]
    NoOpPauseTransition { paused: bool },

    #[error("strategy {strategy} already added")]
    StrategyAlreadyAdded { strategy: Address },

    #[error("strategy {strategy} is not registered")]
    StrategyNotExistent { strategy: Address },

    #[error("keeper {keeper} must be an EOA")]
    KeeperMustBeEoa { keeper: Address },

    #[error("keeper {keeper} is not registered with the registry")]
    KeeperNotRegistered { keeper: Address },

    #[error("keeper {keeper} does not meet the configured minimums")]
    KeeperNotValid { keeper: Address },

    #[error("strategy {strategy} is not workable")]
    StrategyNotWorkable { strategy: Address },

    #[error("strategy {strategy} cannot rebalance")]
    StrategyCannotRebalance { strategy: Address },

    #[error("the zero address is not a valid {role}")]
    ZeroAddress { role: &'static str },
}
