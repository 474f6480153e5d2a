//! Nullable host environment.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use steward_job::{Environment, KeeperRegistry, Strategy};
use steward_types::Address;

use crate::log::CallLog;
use crate::registry::NullRegistry;
use crate::strategy::NullStrategy;

/// An in-memory environment binding addresses to nullable collaborators.
///
/// Resolving an address with nothing bound panics — in a test that is a
/// wiring bug, and on-chain a call into the void would abort the whole
/// invocation anyway.
#[derive(Default)]
pub struct NullEnvironment {
    registries: HashMap<Address, Arc<NullRegistry>>,
    strategies: HashMap<Address, Arc<NullStrategy>>,
    code: HashSet<Address>,
    log: CallLog,
}

impl NullEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chronological log shared by all bound collaborators.
    pub fn log(&self) -> &CallLog {
        &self.log
    }

    /// Bind a fresh registry double at `address` and return a handle to it.
    pub fn bind_registry(&mut self, address: Address) -> Arc<NullRegistry> {
        let registry = Arc::new(NullRegistry::new(self.log.clone()));
        self.registries.insert(address, registry.clone());
        registry
    }

    /// Bind a fresh strategy double at `address` and return a handle to it.
    pub fn bind_strategy(&mut self, address: Address) -> Arc<NullStrategy> {
        let strategy = Arc::new(NullStrategy::new(address, self.log.clone()));
        self.strategies.insert(address, strategy.clone());
        strategy
    }

    /// Mark `address` as having deployed contract code.
    pub fn deploy_code(&mut self, address: Address) {
        self.code.insert(address);
    }
}

impl Environment for NullEnvironment {
    fn has_code(&self, address: &Address) -> bool {
        self.code.contains(address)
    }

    fn registry(&self, address: &Address) -> &dyn KeeperRegistry {
        match self.registries.get(address) {
            Some(registry) => registry.as_ref(),
            None => panic!("no registry bound at {address}"),
        }
    }

    fn strategy(&self, address: &Address) -> &dyn Strategy {
        match self.strategies.get(address) {
            Some(strategy) => strategy.as_ref(),
            None => panic!("no strategy bound at {address}"),
        }
    }
}
