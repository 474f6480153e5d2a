//! Collaborator seams.
//!
//! The registry and the strategies are external contracts consumed only
//! through these traits. All methods take `&self`; side-effecting
//! implementations (the real chain binding, the nullable doubles) use
//! interior mutability. The engine treats every call as capable of
//! arbitrary side effects and bounds the damage by call ordering alone.

use steward_types::{Address, Amount};

/// Query/command surface of the external keeper registry.
pub trait KeeperRegistry {
    /// Baseline registration check: is this account a keeper at all.
    fn is_keeper(&self, keeper: &Address) -> bool;

    /// Registration plus generic minimums (any bond token).
    fn is_min_keeper(
        &self,
        keeper: &Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
    ) -> bool;

    /// Registration plus minimums on a specific bond token.
    fn is_bonded_keeper(
        &self,
        keeper: &Address,
        bond: &Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
    ) -> bool;

    /// Record that `keeper` performed work, crediting its reward.
    fn worked(&self, keeper: &Address);
}

/// The slice of a strategy contract this engine consumes.
pub trait Strategy {
    /// Whether the strategy currently wants a rebalance. Read-only.
    fn should_rebalance(&self) -> bool;

    /// Perform the rebalance. Idempotency is the strategy's concern.
    fn rebalance(&self);
}

/// Host environment a job executes in.
///
/// Resolves addresses to collaborators and answers the code-presence probe
/// behind the EOA-only rule. Resolution of an unbound address is the
/// implementor's failure mode (a failed external call aborts the whole
/// invocation on-chain); the engine never catches it.
pub trait Environment {
    /// Whether `address` currently has contract code deployed.
    ///
    /// Known limitation, inherited from the source platform: a contract
    /// calling during its own construction reports no code yet, so it can
    /// slip past an EOA-only policy. Documented, not worked around.
    fn has_code(&self, address: &Address) -> bool;

    /// Resolve the keeper registry at `address`.
    fn registry(&self, address: &Address) -> &dyn KeeperRegistry;

    /// Resolve the strategy at `address`.
    fn strategy(&self, address: &Address) -> &dyn Strategy;
}
