//! Leave balance counters.
//!
//! The ledger tracks, per employee and leave type, how many days were
//! allocated, how many are consumed by approved requests, and how many are
//! reserved by requests still awaiting a decision. The conservation
//! invariant `allocated = used + pending + remaining` holds across every
//! submit/decide/cancel transition.

use serde::{Deserialize, Serialize};

use crate::models::LeaveType;

/// Day counters for one employee and leave type.
///
/// `remaining` is derived, never stored; `allocated = used + pending +
/// remaining` holds after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Days granted for the period.
    pub allocated: i64,
    /// Days consumed by approved requests.
    pub used: i64,
    /// Days reserved by requests awaiting a decision.
    pub pending: i64,
}

impl LeaveBalance {
    /// Creates a balance with the given allocation and nothing consumed.
    pub fn new(allocated: i64) -> Self {
        Self {
            allocated,
            used: 0,
            pending: 0,
        }
    }

    /// Days still available to new requests.
    pub fn remaining(&self) -> i64 {
        self.allocated - self.used - self.pending
    }

    /// Reserves days for a newly submitted request.
    pub fn reserve(&mut self, days: i64) {
        self.pending += days;
    }

    /// Releases a reservation without consuming it (reject, cancel-pending).
    pub fn release(&mut self, days: i64) {
        self.pending -= days;
    }

    /// Converts a reservation into consumption (approve).
    pub fn consume(&mut self, days: i64) {
        self.pending -= days;
        self.used += days;
    }

    /// Returns consumed days to the allocation (cancel-approved reversal).
    pub fn restore(&mut self, days: i64) {
        self.used -= days;
    }
}

/// A balance snapshot for one leave type, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveTypeBalance {
    /// The leave type the counters apply to.
    pub leave_type: LeaveType,
    /// Days granted for the period.
    pub allocated: i64,
    /// Days consumed by approved requests.
    pub used: i64,
    /// Days reserved by pending requests.
    pub pending: i64,
    /// Days still available to new requests.
    pub remaining: i64,
}

impl LeaveTypeBalance {
    /// Builds the reported snapshot from a ledger balance.
    pub fn from_balance(leave_type: LeaveType, balance: LeaveBalance) -> Self {
        Self {
            leave_type,
            allocated: balance.allocated,
            used: balance.used,
            pending: balance.pending,
            remaining: balance.remaining(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_balance_has_full_remainder() {
        let balance = LeaveBalance::new(25);
        assert_eq!(balance.remaining(), 25);
        assert_eq!(balance.used, 0);
        assert_eq!(balance.pending, 0);
    }

    #[test]
    fn test_reserve_moves_days_to_pending() {
        let mut balance = LeaveBalance::new(25);
        balance.reserve(5);
        assert_eq!(balance.pending, 5);
        assert_eq!(balance.remaining(), 20);
    }

    #[test]
    fn test_consume_converts_pending_to_used() {
        let mut balance = LeaveBalance::new(10);
        balance.reserve(3);
        balance.consume(3);
        assert_eq!(balance.pending, 0);
        assert_eq!(balance.used, 3);
        assert_eq!(balance.remaining(), 7);
    }

    #[test]
    fn test_release_returns_pending_to_remainder() {
        let mut balance = LeaveBalance::new(10);
        balance.reserve(4);
        balance.release(4);
        assert_eq!(balance.pending, 0);
        assert_eq!(balance.remaining(), 10);
    }

    #[test]
    fn test_restore_reverses_consumption() {
        let mut balance = LeaveBalance::new(10);
        balance.reserve(3);
        balance.consume(3);
        balance.restore(3);
        assert_eq!(balance.used, 0);
        assert_eq!(balance.remaining(), 10);
    }

    #[test]
    fn test_conservation_across_transitions() {
        let mut balance = LeaveBalance::new(25);
        let conserved =
            |b: &LeaveBalance| b.allocated == b.used + b.pending + b.remaining();

        assert!(conserved(&balance));
        balance.reserve(5);
        assert!(conserved(&balance));
        balance.consume(5);
        assert!(conserved(&balance));
        balance.reserve(3);
        balance.release(3);
        assert!(conserved(&balance));
        balance.restore(5);
        assert!(conserved(&balance));
    }

    #[test]
    fn test_snapshot_reports_remaining() {
        let mut balance = LeaveBalance::new(25);
        balance.reserve(5);
        let snapshot = LeaveTypeBalance::from_balance(LeaveType::Annual, balance);
        assert_eq!(snapshot.allocated, 25);
        assert_eq!(snapshot.pending, 5);
        assert_eq!(snapshot.remaining, 20);
    }
}
