use proptest::prelude::*;
use std::collections::BTreeSet;

use steward_job::{CallContext, JobError, KeeperRequirements, RebalanceJob, StrategySet};
use steward_nullables::NullEnvironment;
use steward_types::Address;

fn governor() -> Address {
    Address::repeat(0xff)
}

fn registry_address() -> Address {
    Address::repeat(0xfe)
}

fn job() -> RebalanceJob {
    RebalanceJob::new(governor(), registry_address(), KeeperRequirements::none()).unwrap()
}

/// Distinct non-zero single-byte addresses.
fn address_pool(max: usize) -> impl Strategy<Value = Vec<Address>> {
    prop::collection::btree_set(1u8..=0xf0, 0..max)
        .prop_map(|bytes| bytes.into_iter().map(Address::repeat).collect())
}

proptest! {
    /// The set agrees with a model set under any add/remove interleaving,
    /// and every rejection leaves the membership untouched.
    #[test]
    fn strategy_set_tracks_model(
        ops in prop::collection::vec((1u8..=16, any::<bool>()), 0..64)
    ) {
        let mut set = StrategySet::new();
        let mut model = BTreeSet::new();

        for (byte, insert) in ops {
            let addr = Address::repeat(byte);
            if insert {
                match set.add(addr) {
                    Ok(()) => prop_assert!(model.insert(addr)),
                    Err(JobError::StrategyAlreadyAdded { strategy }) => {
                        prop_assert_eq!(strategy, addr);
                        prop_assert!(model.contains(&addr));
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other:?}"),
                }
            } else {
                match set.remove(&addr) {
                    Ok(()) => prop_assert!(model.remove(&addr)),
                    Err(JobError::StrategyNotExistent { strategy }) => {
                        prop_assert_eq!(strategy, addr);
                        prop_assert!(!model.contains(&addr));
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other:?}"),
                }
            }
            prop_assert_eq!(set.len(), model.len());
            let members: BTreeSet<Address> = set.iter().copied().collect();
            prop_assert_eq!(&members, &model);
        }
    }

    /// A pause request commits exactly when it differs from the current
    /// flag, and the flag always ends up where the last committed request
    /// put it.
    #[test]
    fn pause_transitions_reject_exactly_the_no_ops(
        requests in prop::collection::vec(any::<bool>(), 0..32)
    ) {
        let mut job = job();
        let ctx = CallContext::new(governor());
        let mut flag = false;

        for request in requests {
            let result = job.pause(&ctx, request);
            if request == flag {
                prop_assert_eq!(result, Err(JobError::NoOpPauseTransition { paused: request }));
            } else {
                prop_assert_eq!(result, Ok(()));
                flag = request;
            }
            prop_assert_eq!(job.paused(), flag);
        }
    }

    /// The scan returns exactly the first registered strategy whose flag is
    /// set, querying each earlier strategy once and later ones not at all.
    #[test]
    fn scan_finds_the_first_workable_in_insertion_order(
        pool in address_pool(12),
        flags in prop::collection::vec(any::<bool>(), 12)
    ) {
        let mut env = NullEnvironment::new();
        env.bind_registry(registry_address());
        let mut job = job();
        let ctx = CallContext::new(governor());

        let mut doubles = Vec::new();
        for (addr, workable) in pool.iter().zip(&flags) {
            let strategy = env.bind_strategy(*addr);
            strategy.answer_should_rebalance(*workable);
            job.add_strategy(&ctx, *addr).unwrap();
            doubles.push(strategy);
        }

        let expected_index = pool
            .iter()
            .zip(&flags)
            .position(|(_, workable)| *workable);
        let expected = expected_index.map(|i| pool[i]);
        prop_assert_eq!(job.first_workable(&env), expected);

        let queried_up_to = expected_index.map_or(pool.len(), |i| i + 1);
        for (i, strategy) in doubles.iter().enumerate() {
            let expected_calls = usize::from(i < queried_up_to);
            prop_assert_eq!(strategy.should_rebalance_calls(), expected_calls);
        }
    }

    /// Non-governor callers are rejected by every governor-only operation
    /// and nothing changes.
    #[test]
    fn governor_gate_holds_for_any_caller(byte in 0u8..=0xf0) {
        let caller = Address::repeat(byte);
        prop_assume!(caller != governor());
        let mut job = job();
        let ctx = CallContext::new(caller);
        let strategy = Address::repeat(0xf5);

        let unauthorized = Err(JobError::Unauthorized { caller });
        prop_assert_eq!(job.pause(&ctx, true), unauthorized);
        prop_assert_eq!(job.set_registry(&ctx, strategy), unauthorized);
        prop_assert_eq!(job.set_requirements(&ctx, KeeperRequirements::none()), unauthorized);
        prop_assert_eq!(job.add_strategy(&ctx, strategy), unauthorized);
        prop_assert_eq!(job.revoke_strategy(&ctx, strategy), unauthorized);
        prop_assert_eq!(job.propose_governor(&ctx, strategy), unauthorized);

        prop_assert!(!job.paused());
        prop_assert!(job.strategies().is_empty());
        prop_assert_eq!(job.registry(), registry_address());
        prop_assert!(job.events().is_empty());
    }
}
