//! Keyed in-memory stores for attendance records and leave requests.
//!
//! Attendance is keyed by `(employee_id, date)` and leave by request id.
//! The maps' entry guards are what serialize concurrent writers on the
//! same key; operations on different keys proceed in parallel. Persistence
//! engine internals are out of scope for the engine, so this in-memory
//! store is the reference storage.

use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use uuid::Uuid;

use crate::models::{AttendanceRecord, LeaveRequest};

/// The key of one employee-day attendance record.
pub type AttendanceKey = (String, NaiveDate);

/// In-memory storage for the two lifecycle entities.
pub struct LifecycleStore {
    attendance: DashMap<AttendanceKey, AttendanceRecord>,
    leaves: DashMap<Uuid, LeaveRequest>,
}

impl LifecycleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            attendance: DashMap::new(),
            leaves: DashMap::new(),
        }
    }

    /// Returns the entry guard for one employee-day record.
    pub fn attendance_entry(
        &self,
        key: AttendanceKey,
    ) -> Entry<'_, AttendanceKey, AttendanceRecord> {
        self.attendance.entry(key)
    }

    /// Returns a write guard over one employee-day record, if it exists.
    pub fn attendance_mut(
        &self,
        key: &AttendanceKey,
    ) -> Option<RefMut<'_, AttendanceKey, AttendanceRecord>> {
        self.attendance.get_mut(key)
    }

    /// Reads one employee-day record.
    pub fn attendance(&self, key: &AttendanceKey) -> Option<AttendanceRecord> {
        self.attendance.get(key).map(|entry| entry.value().clone())
    }

    /// Inserts a freshly submitted leave request.
    pub fn insert_leave(&self, request: LeaveRequest) {
        self.leaves.insert(request.id, request);
    }

    /// Returns a write guard over one leave request, if it exists.
    pub fn leave_mut(&self, id: Uuid) -> Option<RefMut<'_, Uuid, LeaveRequest>> {
        self.leaves.get_mut(&id)
    }

    /// Reads one leave request.
    pub fn leave(&self, id: Uuid) -> Option<LeaveRequest> {
        self.leaves.get(&id).map(|entry| entry.value().clone())
    }

    /// Collects all leave requests belonging to an employee.
    ///
    /// Callers must not hold any leave entry guard while scanning.
    pub fn employee_requests(&self, employee_id: &str) -> Vec<LeaveRequest> {
        self.leaves
            .iter()
            .filter(|entry| entry.value().employee_id == employee_id)
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Default for LifecycleStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed mutation recorded against a client idempotency key.
#[derive(Debug, Clone)]
pub enum IdempotentOutcome {
    /// The outcome of a check-in or check-out.
    Attendance(AttendanceRecord),
    /// The outcome of a leave submission.
    Leave(LeaveRequest),
}

/// Per-employee log of completed mutations, keyed by the caller's
/// idempotency key.
///
/// Transport-level retries replay the recorded outcome instead of
/// re-executing the transition.
pub struct IdempotencyLog {
    completed: DashMap<(String, String), IdempotentOutcome>,
}

impl IdempotencyLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            completed: DashMap::new(),
        }
    }

    /// Looks up the outcome recorded for an employee's idempotency key.
    pub fn get(&self, employee_id: &str, key: &str) -> Option<IdempotentOutcome> {
        self.completed
            .get(&(employee_id.to_string(), key.to_string()))
            .map(|entry| entry.value().clone())
    }

    /// Records the outcome of a completed mutation.
    pub fn record(&self, employee_id: &str, key: String, outcome: IdempotentOutcome) {
        self.completed
            .insert((employee_id.to_string(), key), outcome);
    }
}

impl Default for IdempotencyLog {
    fn default() -> Self {
        Self::new()
    }
}
