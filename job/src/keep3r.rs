//! Keeper eligibility policy.
//!
//! Holds the registry reference and the tunable requirements bundle, and
//! answers "may this caller work" by delegating to the registry. Exactly one
//! registry query path runs per validation: the generic path (no specific
//! bond token configured) or the bonded path.

use serde::{Deserialize, Serialize};
use steward_types::{Address, Amount};

use crate::error::JobError;
use crate::traits::Environment;

/// The tunable eligibility parameters, replaced atomically as one bundle.
///
/// `bond == Address::ZERO` means no specific bond token is required and the
/// generic registration/minimums path applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeeperRequirements {
    pub bond: Address,
    pub min_bond: Amount,
    pub min_earnings: Amount,
    pub min_age: u64,
    pub eoa_only: bool,
}

impl KeeperRequirements {
    /// No requirements beyond baseline registration.
    pub fn none() -> Self {
        Self {
            bond: Address::ZERO,
            min_bond: Amount::ZERO,
            min_earnings: Amount::ZERO,
            min_age: 0,
            eoa_only: false,
        }
    }
}

/// Registry reference plus requirements; the eligibility half of the job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeeperPolicy {
    registry: Address,
    requirements: KeeperRequirements,
}

impl KeeperPolicy {
    pub fn new(registry: Address, requirements: KeeperRequirements) -> Self {
        Self {
            registry,
            requirements,
        }
    }

    pub fn registry(&self) -> Address {
        self.registry
    }

    pub fn requirements(&self) -> KeeperRequirements {
        self.requirements
    }

    pub fn set_registry(&mut self, registry: Address) {
        self.registry = registry;
    }

    pub fn set_requirements(&mut self, requirements: KeeperRequirements) {
        self.requirements = requirements;
    }

    /// Validate `candidate` as a keeper.
    ///
    /// Check order is part of the contract:
    /// 1. EOA-only: a candidate with deployed code is rejected outright.
    /// 2. No specific bond token: baseline registration first
    ///    (`KeeperNotRegistered` short-circuits before minimums are even
    ///    queried), then the generic minimums (`KeeperNotValid`).
    /// 3. Specific bond token: the single bonded-keeper query
    ///    (`KeeperNotValid`).
    pub fn validate(&self, env: &dyn Environment, candidate: &Address) -> Result<(), JobError> {
        let req = &self.requirements;
        if req.eoa_only && env.has_code(candidate) {
            return Err(JobError::KeeperMustBeEoa { keeper: *candidate });
        }

        let registry = env.registry(&self.registry);
        if req.bond.is_zero() {
            if !registry.is_keeper(candidate) {
                return Err(JobError::KeeperNotRegistered { keeper: *candidate });
            }
            if !registry.is_min_keeper(candidate, req.min_bond, req.min_earnings, req.min_age) {
                return Err(JobError::KeeperNotValid { keeper: *candidate });
            }
        } else if !registry.is_bonded_keeper(
            candidate,
            &req.bond,
            req.min_bond,
            req.min_earnings,
            req.min_age,
        ) {
            return Err(JobError::KeeperNotValid { keeper: *candidate });
        }

        tracing::debug!(keeper = %candidate, "keeper validated");
        Ok(())
    }

    /// Credit `keeper` for completed work. Must run only after the
    /// productive action has finished.
    pub fn notify_worked(&self, env: &dyn Environment, keeper: &Address) {
        env.registry(&self.registry).worked(keeper);
    }
}
