//! Ordered set of registered strategy addresses.
//!
//! A growable ordered list plus an address-to-index map: membership, add
//! and remove are all O(1). Removal swaps the target with the last element
//! and pops, so it does not preserve the order of survivors — callers may
//! rely on insertion order only between mutations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use steward_types::Address;

use crate::error::JobError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet {
    ordered: Vec<Address>,
    index: HashMap<Address, usize>,
}

impl StrategySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, strategy: &Address) -> bool {
        self.index.contains_key(strategy)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Current membership, insertion-ordered since the last removal.
    pub fn as_slice(&self) -> &[Address] {
        &self.ordered
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.ordered.iter()
    }

    /// Append a strategy. Duplicates are rejected.
    pub fn add(&mut self, strategy: Address) -> Result<(), JobError> {
        if self.contains(&strategy) {
            return Err(JobError::StrategyAlreadyAdded { strategy });
        }
        self.index.insert(strategy, self.ordered.len());
        self.ordered.push(strategy);
        Ok(())
    }

    /// Remove a strategy (swap-remove). Absence is rejected.
    pub fn remove(&mut self, strategy: &Address) -> Result<(), JobError> {
        let position = self
            .index
            .remove(strategy)
            .ok_or(JobError::StrategyNotExistent {
                strategy: *strategy,
            })?;
        self.ordered.swap_remove(position);
        if let Some(moved) = self.ordered.get(position) {
            self.index.insert(*moved, position);
        }
        Ok(())
    }
}
