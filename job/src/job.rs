//! The rebalance job — composition root and dispatch logic.

use serde::{Deserialize, Serialize};
use steward_types::Address;

use crate::context::CallContext;
use crate::error::JobError;
use crate::event::JobEvent;
use crate::governable::Governable;
use crate::keep3r::{KeeperPolicy, KeeperRequirements};
use crate::pausable::PauseState;
use crate::strategy_set::StrategySet;
use crate::traits::Environment;

/// A keeper job dispatching `rebalance` over a curated strategy set.
///
/// Governor-only surface: `pause`, `set_registry`, `set_requirements`,
/// `add_strategy`, `revoke_strategy`, `force_work`, `propose_governor`.
/// Open surface: the read-only queries and `work` (whose caller is
/// validated against the keeper registry instead).
#[derive(Debug, Serialize, Deserialize)]
pub struct RebalanceJob {
    governable: Governable,
    pause: PauseState,
    policy: KeeperPolicy,
    strategies: StrategySet,
    /// Emitted events of committed operations, drained by the host.
    #[serde(skip)]
    events: Vec<JobEvent>,
}

impl RebalanceJob {
    /// Construct with an initial governor, registry reference and
    /// requirements bundle. Rejects a zero governor.
    pub fn new(
        governor: Address,
        registry: Address,
        requirements: KeeperRequirements,
    ) -> Result<Self, JobError> {
        Ok(Self {
            governable: Governable::new(governor)?,
            pause: PauseState::new(),
            policy: KeeperPolicy::new(registry, requirements),
            strategies: StrategySet::new(),
            events: Vec::new(),
        })
    }

    // ---- read-only state accessors ----

    pub fn governor(&self) -> Address {
        self.governable.governor()
    }

    pub fn pending_governor(&self) -> Option<Address> {
        self.governable.pending_governor()
    }

    pub fn paused(&self) -> bool {
        self.pause.paused()
    }

    pub fn registry(&self) -> Address {
        self.policy.registry()
    }

    pub fn requirements(&self) -> KeeperRequirements {
        self.policy.requirements()
    }

    /// Registered strategies, insertion-ordered since the last revocation.
    pub fn strategies(&self) -> &[Address] {
        self.strategies.as_slice()
    }

    /// Events emitted so far and not yet drained.
    pub fn events(&self) -> &[JobEvent] {
        &self.events
    }

    /// Hand the accumulated events to the host, clearing the log.
    pub fn drain_events(&mut self) -> Vec<JobEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- governor transfer ----

    /// Stage a successor governor (two-step transfer, step one).
    pub fn propose_governor(
        &mut self,
        ctx: &CallContext,
        pending: Address,
    ) -> Result<(), JobError> {
        self.governable.propose(&ctx.caller, pending)?;
        tracing::info!(pending = %pending, "governor successor proposed");
        self.events.push(JobEvent::GovernorProposed { pending });
        Ok(())
    }

    /// Complete the governor handover (two-step transfer, step two).
    pub fn accept_governor(&mut self, ctx: &CallContext) -> Result<(), JobError> {
        self.governable.accept(&ctx.caller)?;
        tracing::info!(governor = %ctx.caller, "governor handover accepted");
        self.events.push(JobEvent::GovernorAccepted {
            governor: ctx.caller,
        });
        Ok(())
    }

    // ---- governance configuration ----

    /// Flip the pause flag. Governor-only; the no-op transition is rejected.
    pub fn pause(&mut self, ctx: &CallContext, paused: bool) -> Result<(), JobError> {
        self.governable.ensure_governor(&ctx.caller)?;
        self.pause.set(paused)?;
        tracing::info!(paused, "pause flag changed");
        self.events.push(JobEvent::PauseChanged { paused });
        Ok(())
    }

    /// Replace the keeper registry reference. Governor-only.
    pub fn set_registry(&mut self, ctx: &CallContext, registry: Address) -> Result<(), JobError> {
        self.governable.ensure_governor(&ctx.caller)?;
        self.policy.set_registry(registry);
        tracing::info!(registry = %registry, "keeper registry replaced");
        self.events.push(JobEvent::RegistrySet { registry });
        Ok(())
    }

    /// Replace the whole requirements bundle atomically. Governor-only.
    /// There is deliberately no per-field update path.
    pub fn set_requirements(
        &mut self,
        ctx: &CallContext,
        requirements: KeeperRequirements,
    ) -> Result<(), JobError> {
        self.governable.ensure_governor(&ctx.caller)?;
        self.policy.set_requirements(requirements);
        tracing::info!(
            bond = %requirements.bond,
            min_bond = %requirements.min_bond,
            min_earnings = %requirements.min_earnings,
            min_age = requirements.min_age,
            eoa_only = requirements.eoa_only,
            "keeper requirements replaced"
        );
        self.events.push(JobEvent::RequirementsSet {
            bond: requirements.bond,
            min_bond: requirements.min_bond,
            min_earnings: requirements.min_earnings,
            min_age: requirements.min_age,
            eoa_only: requirements.eoa_only,
        });
        Ok(())
    }

    // ---- strategy registry ----

    /// Register a strategy. Governor-only; duplicates are rejected.
    pub fn add_strategy(&mut self, ctx: &CallContext, strategy: Address) -> Result<(), JobError> {
        self.governable.ensure_governor(&ctx.caller)?;
        self.strategies.add(strategy)?;
        tracing::info!(strategy = %strategy, "strategy added");
        self.events.push(JobEvent::StrategyAdded { strategy });
        Ok(())
    }

    /// Deregister a strategy. Governor-only; absence is rejected.
    pub fn revoke_strategy(
        &mut self,
        ctx: &CallContext,
        strategy: Address,
    ) -> Result<(), JobError> {
        self.governable.ensure_governor(&ctx.caller)?;
        self.strategies.remove(&strategy)?;
        tracing::info!(strategy = %strategy, "strategy revoked");
        self.events.push(JobEvent::StrategyRevoked { strategy });
        Ok(())
    }

    // ---- workability queries ----

    /// Whether `strategy` can be worked right now: always `false` while
    /// paused, otherwise the strategy's own answer, verbatim. No side
    /// effects, and no registration requirement on `strategy`.
    pub fn workable(&self, env: &dyn Environment, strategy: &Address) -> bool {
        if self.pause.paused() {
            return false;
        }
        env.strategy(strategy).should_rebalance()
    }

    /// Scan the registered strategies in order and return the first one
    /// reporting workable, or `None` if paused, empty, or none want work.
    /// Strategies after the first hit are never queried.
    pub fn first_workable(&self, env: &dyn Environment) -> Option<Address> {
        if self.pause.paused() {
            return None;
        }
        self.strategies
            .iter()
            .copied()
            .find(|strategy| env.strategy(strategy).should_rebalance())
    }

    // ---- dispatch ----

    /// Keeper entry point: validate the caller, require the strategy to be
    /// workable, rebalance it, then credit the caller with the registry.
    ///
    /// The order is part of the contract: validation, workability check,
    /// `rebalance`, `worked` — the credit call runs strictly after the
    /// rebalance has completed.
    pub fn work(
        &self,
        env: &dyn Environment,
        ctx: &CallContext,
        strategy: Address,
    ) -> Result<(), JobError> {
        self.policy.validate(env, &ctx.caller)?;
        if !self.workable(env, &strategy) {
            return Err(JobError::StrategyNotWorkable { strategy });
        }
        env.strategy(&strategy).rebalance();
        self.policy.notify_worked(env, &ctx.caller);
        tracing::info!(keeper = %ctx.caller, strategy = %strategy, "strategy worked");
        Ok(())
    }

    /// Governor entry point bypassing keeper eligibility and the pause
    /// flag. The strategy must still want a rebalance; no registry credit
    /// is recorded.
    pub fn force_work(
        &self,
        env: &dyn Environment,
        ctx: &CallContext,
        strategy: Address,
    ) -> Result<(), JobError> {
        self.governable.ensure_governor(&ctx.caller)?;
        if !env.strategy(&strategy).should_rebalance() {
            return Err(JobError::StrategyCannotRebalance { strategy });
        }
        env.strategy(&strategy).rebalance();
        tracing::info!(strategy = %strategy, "strategy force-worked by governor");
        Ok(())
    }
}
