//! Nullable keeper registry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use steward_job::KeeperRegistry;
use steward_types::{Address, Amount};

use crate::log::CallLog;

/// One recorded registry call with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryCall {
    IsKeeper {
        keeper: Address,
    },
    IsMinKeeper {
        keeper: Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
    },
    IsBondedKeeper {
        keeper: Address,
        bond: Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
    },
    Worked {
        keeper: Address,
    },
}

/// A keeper registry with programmable answers.
///
/// Every query answers `false` until told otherwise (the same default the
/// real registry gives an unknown keeper).
pub struct NullRegistry {
    is_keeper_answer: AtomicBool,
    is_min_keeper_answer: AtomicBool,
    is_bonded_keeper_answer: AtomicBool,
    calls: Mutex<Vec<RegistryCall>>,
    log: CallLog,
}

impl NullRegistry {
    pub fn new(log: CallLog) -> Self {
        Self {
            is_keeper_answer: AtomicBool::new(false),
            is_min_keeper_answer: AtomicBool::new(false),
            is_bonded_keeper_answer: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
            log,
        }
    }

    pub fn answer_is_keeper(&self, answer: bool) {
        self.is_keeper_answer.store(answer, Ordering::SeqCst);
    }

    pub fn answer_is_min_keeper(&self, answer: bool) {
        self.is_min_keeper_answer.store(answer, Ordering::SeqCst);
    }

    pub fn answer_is_bonded_keeper(&self, answer: bool) {
        self.is_bonded_keeper_answer.store(answer, Ordering::SeqCst);
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `worked` was called.
    pub fn worked_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, RegistryCall::Worked { .. }))
            .count()
    }

    fn record(&self, call: RegistryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl KeeperRegistry for NullRegistry {
    fn is_keeper(&self, keeper: &Address) -> bool {
        self.record(RegistryCall::IsKeeper { keeper: *keeper });
        self.is_keeper_answer.load(Ordering::SeqCst)
    }

    fn is_min_keeper(
        &self,
        keeper: &Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
    ) -> bool {
        self.record(RegistryCall::IsMinKeeper {
            keeper: *keeper,
            min_bond,
            min_earnings,
            min_age,
        });
        self.is_min_keeper_answer.load(Ordering::SeqCst)
    }

    fn is_bonded_keeper(
        &self,
        keeper: &Address,
        bond: &Address,
        min_bond: Amount,
        min_earnings: Amount,
        min_age: u64,
    ) -> bool {
        self.record(RegistryCall::IsBondedKeeper {
            keeper: *keeper,
            bond: *bond,
            min_bond,
            min_earnings,
            min_age,
        });
        self.is_bonded_keeper_answer.load(Ordering::SeqCst)
    }

    fn worked(&self, keeper: &Address) {
        self.record(RegistryCall::Worked { keeper: *keeper });
        self.log.record(format!("worked {keeper}"));
    }
}
