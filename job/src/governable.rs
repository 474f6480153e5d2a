//! Governor identity with two-step transfer.
//!
//! A single governor gates every mutating operation. Transfer is
//! propose/accept: the incumbent stages a successor, and only the staged
//! address can complete the handover. A mistyped proposal is therefore
//! recoverable by proposing again.

use serde::{Deserialize, Serialize};
use steward_types::Address;

use crate::error::JobError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Governable {
    governor: Address,
    pending_governor: Option<Address>,
}

impl Governable {
    /// Create with an initial governor. The zero address is rejected, so a
    /// constructed instance always has exactly one live governor.
    pub fn new(governor: Address) -> Result<Self, JobError> {
        if governor.is_zero() {
            return Err(JobError::ZeroAddress { role: "governor" });
        }
        Ok(Self {
            governor,
            pending_governor: None,
        })
    }

    pub fn governor(&self) -> Address {
        self.governor
    }

    pub fn pending_governor(&self) -> Option<Address> {
        self.pending_governor
    }

    /// Reject any caller that is not the current governor.
    pub fn ensure_governor(&self, caller: &Address) -> Result<(), JobError> {
        if *caller != self.governor {
            return Err(JobError::Unauthorized { caller: *caller });
        }
        Ok(())
    }

    /// Stage a successor. Governor-only; the zero address is rejected.
    /// Proposing again overwrites any previously staged successor.
    pub fn propose(&mut self, caller: &Address, pending: Address) -> Result<(), JobError> {
        self.ensure_governor(caller)?;
        if pending.is_zero() {
            return Err(JobError::ZeroAddress { role: "pending governor" });
        }
        self.pending_governor = Some(pending);
        Ok(())
    }

    /// Complete the handover. Callable only by the staged successor.
    pub fn accept(&mut self, caller: &Address) -> Result<(), JobError> {
        if self.pending_governor != Some(*caller) {
            return Err(JobError::Unauthorized { caller: *caller });
        }
        self.governor = *caller;
        self.pending_governor = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::repeat(byte)
    }

    #[test]
    fn rejects_zero_governor_at_construction() {
        assert_eq!(
            Governable::new(Address::ZERO),
            Err(JobError::ZeroAddress { role: "governor" })
        );
    }

    #[test]
    fn only_governor_passes_the_check() {
        let gov = Governable::new(addr(1)).unwrap();
        assert!(gov.ensure_governor(&addr(1)).is_ok());
        assert_eq!(
            gov.ensure_governor(&addr(2)),
            Err(JobError::Unauthorized { caller: addr(2) })
        );
    }

    #[test]
    fn two_step_transfer() {
        let mut gov = Governable::new(addr(1)).unwrap();

        // Successor cannot accept before being proposed.
        assert_eq!(
            gov.accept(&addr(2)),
            Err(JobError::Unauthorized { caller: addr(2) })
        );

        gov.propose(&addr(1), addr(2)).unwrap();
        assert_eq!(gov.pending_governor(), Some(addr(2)));

        // Incumbent stays in charge until the successor accepts.
        assert_eq!(gov.governor(), addr(1));
        assert_eq!(
            gov.accept(&addr(3)),
            Err(JobError::Unauthorized { caller: addr(3) })
        );

        gov.accept(&addr(2)).unwrap();
        assert_eq!(gov.governor(), addr(2));
        assert_eq!(gov.pending_governor(), None);
    }

    #[test]
    fn proposal_can_be_overwritten() {
        let mut gov = Governable::new(addr(1)).unwrap();
        gov.propose(&addr(1), addr(2)).unwrap();
        gov.propose(&addr(1), addr(3)).unwrap();
        assert_eq!(
            gov.accept(&addr(2)),
            Err(JobError::Unauthorized { caller: addr(2) })
        );
        gov.accept(&addr(3)).unwrap();
        assert_eq!(gov.governor(), addr(3));
    }

    #[test]
    fn zero_successor_rejected() {
        let mut gov = Governable::new(addr(1)).unwrap();
        assert_eq!(
            gov.propose(&addr(1), Address::ZERO),
            Err(JobError::ZeroAddress {
                role: "pending governor"
            })
        );
    }
}
