//! Nullable strategy.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use steward_job::Strategy;
use steward_types::Address;

use crate::log::CallLog;

/// A strategy with a programmable `should_rebalance` answer.
///
/// Records call counts and writes `rebalance` into the shared log for
/// ordering assertions.
pub struct NullStrategy {
    address: Address,
    should_rebalance_answer: AtomicBool,
    should_rebalance_calls: AtomicUsize,
    rebalance_calls: AtomicUsize,
    log: CallLog,
}

impl NullStrategy {
    pub fn new(address: Address, log: CallLog) -> Self {
        Self {
            address,
            should_rebalance_answer: AtomicBool::new(false),
            should_rebalance_calls: AtomicUsize::new(0),
            rebalance_calls: AtomicUsize::new(0),
            log,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn answer_should_rebalance(&self, answer: bool) {
        self.should_rebalance_answer.store(answer, Ordering::SeqCst);
    }

    pub fn should_rebalance_calls(&self) -> usize {
        self.should_rebalance_calls.load(Ordering::SeqCst)
    }

    pub fn rebalance_calls(&self) -> usize {
        self.rebalance_calls.load(Ordering::SeqCst)
    }
}

impl Strategy for NullStrategy {
    fn should_rebalance(&self) -> bool {
        self.should_rebalance_calls.fetch_add(1, Ordering::SeqCst);
        self.should_rebalance_answer.load(Ordering::SeqCst)
    }

    fn rebalance(&self) {
        self.rebalance_calls.fetch_add(1, Ordering::SeqCst);
        self.log.record(format!("rebalance {}", self.address));
    }
}
