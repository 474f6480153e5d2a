//! Keeper-job access-control and work-dispatch engine.
//!
//! A [`RebalanceJob`] lets permissionless keepers trigger `rebalance` on a
//! governor-curated set of strategies, in exchange for a reward metered by an
//! external keeper registry. The engine owns three concerns:
//!
//! - **eligibility**: who may call `work`, delegated to the registry
//!   (registration / minimum bond / bonded-token / EOA-only rules),
//! - **pausing**: a governor-flipped flag that disables all keeper work
//!   (but not governor `force_work`),
//! - **dispatch**: the first-match scan over registered strategies and the
//!   rebalance-then-notify call ordering.
//!
//! External collaborators (the registry and the strategies) are reached
//! through the [`Environment`] trait and are treated as untrusted: the
//! engine relies on call ordering, not on their good behaviour.

pub mod context;
pub mod error;
pub mod event;
pub mod governable;
pub mod job;
pub mod keep3r;
pub mod pausable;
pub mod strategy_set;
pub mod traits;

pub use context::CallContext;
pub use error::JobError;
pub use event::JobEvent;
pub use governable::Governable;
pub use job::RebalanceJob;
pub use keep3r::{KeeperPolicy, KeeperRequirements};
pub use pausable::PauseState;
pub use strategy_set::StrategySet;
pub use traits::{Environment, KeeperRegistry, Strategy};
