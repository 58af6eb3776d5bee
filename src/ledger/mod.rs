//! The leave balance ledger.
//!
//! Authoritative per-employee, per-leave-type day counters, mutated only by
//! the leave workflow through the gateway. The ledger is a keyed concurrent
//! store rather than a singleton balance object: each `(employee, leave
//! type)` pair owns its counters, and a mutation holds that entry's guard
//! for the duration of the transition so concurrent submits against the
//! same balance serialize.

use dashmap::DashMap;
use dashmap::mapref::one::RefMut;

use crate::config::LeavePolicy;
use crate::models::{LeaveBalance, LeaveType};

/// Keyed store of leave balances.
///
/// Entries are created lazily from the leave policy's allocation on first
/// touch; employees themselves are owned by the external directory, so the
/// ledger never needs a registration step.
pub struct Ledger {
    entries: DashMap<(String, LeaveType), LeaveBalance>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns a write guard over one employee's balance for a leave type,
    /// creating the entry from the policy allocation if it does not exist.
    ///
    /// The guard serializes concurrent mutations of the same balance; hold
    /// it for the whole transition so the balance and the request commit
    /// as one unit.
    pub fn entry(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        policy: &LeavePolicy,
    ) -> RefMut<'_, (String, LeaveType), LeaveBalance> {
        self.entries
            .entry((employee_id.to_string(), leave_type))
            .or_insert_with(|| LeaveBalance::new(policy.allocated_days))
    }

    /// Reads one employee's balance for a leave type.
    ///
    /// Untouched balances are materialized from the policy allocation
    /// without creating an entry.
    pub fn balance(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        policy: &LeavePolicy,
    ) -> LeaveBalance {
        self.entries
            .get(&(employee_id.to_string(), leave_type))
            .map(|entry| *entry.value())
            .unwrap_or_else(|| LeaveBalance::new(policy.allocated_days))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
