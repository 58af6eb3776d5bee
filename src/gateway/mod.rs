//! The lifecycle gateway.
//!
//! The only component external callers talk to. It resolves the actor,
//! performs the single capability check, loads the relevant entity with
//! its version, delegates to the pure rules in [`crate::lifecycle`], and
//! commits the mutation under the entity's keyed guard. It contains no
//! business rules of its own.
//!
//! Lock ordering: every leave path acquires the request guard before the
//! ledger guard, so the request's state transition and the balance
//! movement commit as one unit without deadlocking against other paths.

mod authorization;
mod store;

pub use authorization::{Operation, allowed_roles, authorize};
pub use store::{AttendanceKey, IdempotencyLog, IdempotentOutcome, LifecycleStore};

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::ledger::Ledger;
use crate::lifecycle;
use crate::models::{
    Actor, AttendanceRecord, AttendanceStatus, LeaveDecision, LeaveRequest, LeaveType,
    LeaveTypeBalance, Location,
};

/// Supplies the current instant in the organization's local time.
///
/// A pure dependency of the gateway; production uses [`SystemClock`],
/// tests pin time with [`FixedClock`].
pub trait Clock: Send + Sync {
    /// The current org-local instant.
    fn now(&self) -> NaiveDateTime;
}

/// The production clock, backed by the host's local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock pinned to an instant that tests can move.
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().expect("clock lock poisoned") = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// An attendance day as reported to callers: the stored facts plus the
/// derived status.
///
/// Synthesized for days that never saw a check-in, which is how an
/// elapsed day with no record reads as absent without storing anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceView {
    /// The employee the day belongs to.
    pub employee_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The derived status.
    pub status: AttendanceStatus,
    /// When the employee checked in, if they did.
    pub check_in: Option<NaiveDateTime>,
    /// When the employee checked out, if they did.
    pub check_out: Option<NaiveDateTime>,
    /// Where the employee worked from, when a record exists.
    pub location: Option<Location>,
    /// Notes on the record, when a record exists.
    pub notes: Option<String>,
    /// Hours worked, zero until checked out.
    pub working_hours: Decimal,
    /// Overtime hours, zero until checked out.
    pub overtime_hours: Decimal,
}

impl AttendanceView {
    fn build(
        employee_id: &str,
        date: NaiveDate,
        record: Option<&AttendanceRecord>,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            status,
            check_in: record.and_then(|r| r.check_in),
            check_out: record.and_then(|r| r.check_out),
            location: record.map(|r| r.location),
            notes: record.and_then(|r| r.notes.clone()),
            working_hours: record.map(|r| r.working_hours).unwrap_or(Decimal::ZERO),
            overtime_hours: record.map(|r| r.overtime_hours).unwrap_or(Decimal::ZERO),
        }
    }
}

/// Today's attendance view plus what the employee can still do with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayView {
    /// Today's attendance state.
    pub attendance: AttendanceView,
    /// True while today has no check-in yet.
    pub can_check_in: bool,
    /// True while today's record is open.
    pub can_check_out: bool,
}

/// The authorization and transaction boundary in front of the two state
/// machines and the ledger.
pub struct LifecycleGateway {
    config: Arc<ConfigLoader>,
    store: LifecycleStore,
    ledger: Ledger,
    idempotency: IdempotencyLog,
    clock: Arc<dyn Clock>,
}

impl LifecycleGateway {
    /// Creates a gateway running on the system clock.
    pub fn new(config: Arc<ConfigLoader>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a gateway with an explicit time source.
    pub fn with_clock(config: Arc<ConfigLoader>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            store: LifecycleStore::new(),
            ledger: Ledger::new(),
            idempotency: IdempotencyLog::new(),
            clock,
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Opens today's attendance record for the actor.
    ///
    /// With an idempotency key, a retried call replays the recorded
    /// outcome instead of failing with `AlreadyCheckedIn`.
    pub fn check_in(
        &self,
        actor: &Actor,
        location: Location,
        notes: Option<String>,
        idempotency_key: Option<String>,
    ) -> EngineResult<AttendanceRecord> {
        authorization::authorize(actor, Operation::CheckIn, &actor.employee_id)?;

        if let Some(key) = idempotency_key.as_deref() {
            if let Some(IdempotentOutcome::Attendance(record)) =
                self.idempotency.get(&actor.employee_id, key)
            {
                return Ok(record);
            }
        }

        let now = self.clock.now();
        let key = (actor.employee_id.clone(), now.date());

        let record = match self.store.attendance_entry(key) {
            Entry::Occupied(mut entry) => {
                let record =
                    lifecycle::check_in(Some(entry.get()), &actor.employee_id, now, location, notes)?;
                entry.insert(record.clone());
                record
            }
            Entry::Vacant(entry) => {
                let record = lifecycle::check_in(None, &actor.employee_id, now, location, notes)?;
                entry.insert(record.clone());
                record
            }
        };

        if let Some(key) = idempotency_key {
            self.idempotency.record(
                &actor.employee_id,
                key,
                IdempotentOutcome::Attendance(record.clone()),
            );
        }

        info!(
            employee_id = %actor.employee_id,
            date = %record.date,
            "employee checked in"
        );
        Ok(record)
    }

    /// Closes today's attendance record for the actor.
    pub fn check_out(
        &self,
        actor: &Actor,
        break_minutes: Option<u32>,
        notes: Option<String>,
        idempotency_key: Option<String>,
    ) -> EngineResult<AttendanceRecord> {
        authorization::authorize(actor, Operation::CheckOut, &actor.employee_id)?;

        if let Some(key) = idempotency_key.as_deref() {
            if let Some(IdempotentOutcome::Attendance(record)) =
                self.idempotency.get(&actor.employee_id, key)
            {
                return Ok(record);
            }
        }

        let now = self.clock.now();
        let key = (actor.employee_id.clone(), now.date());
        let shift = self.config.shift_config(actor.department.as_deref());

        let record = match self.store.attendance_mut(&key) {
            Some(mut guard) => {
                let updated = lifecycle::check_out(
                    Some(guard.clone()),
                    &actor.employee_id,
                    now,
                    break_minutes,
                    notes,
                    shift,
                )?;
                *guard = updated.clone();
                updated
            }
            None => {
                return Err(EngineError::NoOpenSession {
                    employee_id: actor.employee_id.clone(),
                    date: now.date(),
                });
            }
        };

        if let Some(key) = idempotency_key {
            self.idempotency.record(
                &actor.employee_id,
                key,
                IdempotentOutcome::Attendance(record.clone()),
            );
        }

        info!(
            employee_id = %actor.employee_id,
            date = %record.date,
            working_hours = %record.working_hours,
            "employee checked out"
        );
        Ok(record)
    }

    /// Reads an employee-day with its derived status.
    pub fn attendance(
        &self,
        actor: &Actor,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<AttendanceView> {
        authorization::authorize(actor, Operation::ViewAttendance, employee_id)?;

        let now = self.clock.now();
        let record = self.store.attendance(&(employee_id.to_string(), date));
        let shift = self.config.shift_config(actor.department.as_deref());
        let status = lifecycle::derive_status(record.as_ref(), date, shift, now);

        Ok(AttendanceView::build(employee_id, date, record.as_ref(), status))
    }

    /// Reads the actor's own attendance for today, with what they can
    /// still do with it.
    pub fn today(&self, actor: &Actor) -> EngineResult<TodayView> {
        let now = self.clock.now();
        let date = now.date();
        let record = self.store.attendance(&(actor.employee_id.clone(), date));
        let shift = self.config.shift_config(actor.department.as_deref());
        let status = lifecycle::derive_status(record.as_ref(), date, shift, now);

        let can_check_in = record.as_ref().is_none_or(|r| r.check_in.is_none());
        let can_check_out = record.as_ref().is_some_and(|r| r.is_open());

        Ok(TodayView {
            attendance: AttendanceView::build(&actor.employee_id, date, record.as_ref(), status),
            can_check_in,
            can_check_out,
        })
    }

    /// Submits a leave request for the actor and reserves its days.
    pub fn submit_leave(
        &self,
        actor: &Actor,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
        idempotency_key: Option<String>,
    ) -> EngineResult<LeaveRequest> {
        authorization::authorize(actor, Operation::SubmitLeave, &actor.employee_id)?;

        if let Some(key) = idempotency_key.as_deref() {
            if let Some(IdempotentOutcome::Leave(request)) =
                self.idempotency.get(&actor.employee_id, key)
            {
                return Ok(request);
            }
        }

        let now = self.clock.now();
        let policy = self.config.leave_policy(leave_type)?;
        // Collected before any guard is taken; the scan read-locks shards.
        let existing = self.store.employee_requests(&actor.employee_id);

        let request = {
            let mut balance = self.ledger.entry(&actor.employee_id, leave_type, policy);
            lifecycle::submit(
                &actor.employee_id,
                leave_type,
                start_date,
                end_date,
                reason,
                now,
                self.config.calendar(),
                policy,
                &mut balance,
                &existing,
            )?
        };
        self.store.insert_leave(request.clone());

        if let Some(key) = idempotency_key {
            self.idempotency
                .record(&actor.employee_id, key, IdempotentOutcome::Leave(request.clone()));
        }

        info!(
            employee_id = %actor.employee_id,
            request_id = %request.id,
            leave_type = %leave_type,
            number_of_days = request.number_of_days,
            "leave request submitted"
        );
        Ok(request)
    }

    /// Reads one leave request.
    pub fn leave(&self, actor: &Actor, request_id: Uuid) -> EngineResult<LeaveRequest> {
        let request = self
            .store
            .leave(request_id)
            .ok_or(EngineError::LeaveNotFound { request_id })?;
        authorization::authorize(actor, Operation::ViewLeave, &request.employee_id)?;
        Ok(request)
    }

    /// Applies an HR decision to a pending request.
    ///
    /// The request mutation and the ledger movement happen under the same
    /// pair of guards, so no interleaving can observe one without the
    /// other.
    pub fn decide_leave(
        &self,
        actor: &Actor,
        request_id: Uuid,
        decision: LeaveDecision,
        expected_version: u64,
        hr_notes: Option<String>,
        rejection_reason: Option<String>,
    ) -> EngineResult<LeaveRequest> {
        authorization::authorize(actor, Operation::DecideLeave, &actor.employee_id)?;

        let now = self.clock.now();
        let mut guard = self
            .store
            .leave_mut(request_id)
            .ok_or(EngineError::LeaveNotFound { request_id })?;
        let policy = self.config.leave_policy(guard.leave_type)?;
        let mut balance = self.ledger.entry(&guard.employee_id, guard.leave_type, policy);

        lifecycle::decide(
            &mut guard,
            &actor.employee_id,
            decision,
            hr_notes,
            rejection_reason,
            expected_version,
            now,
            &mut balance,
        )?;
        let request = guard.clone();
        drop(balance);
        drop(guard);

        info!(
            request_id = %request.id,
            decided_by = %actor.employee_id,
            status = %request.status,
            "leave request decided"
        );
        Ok(request)
    }

    /// Cancels a pending request, or an approved one that has not started.
    pub fn cancel_leave(&self, actor: &Actor, request_id: Uuid) -> EngineResult<LeaveRequest> {
        let now = self.clock.now();
        let mut guard = self
            .store
            .leave_mut(request_id)
            .ok_or(EngineError::LeaveNotFound { request_id })?;
        authorization::authorize(actor, Operation::CancelLeave, &guard.employee_id)?;

        let policy = self.config.leave_policy(guard.leave_type)?;
        let mut balance = self.ledger.entry(&guard.employee_id, guard.leave_type, policy);

        lifecycle::cancel(&mut guard, now.date(), &mut balance)?;
        let request = guard.clone();
        drop(balance);
        drop(guard);

        info!(
            request_id = %request.id,
            cancelled_by = %actor.employee_id,
            "leave request cancelled"
        );
        Ok(request)
    }

    /// Reads an employee's balances for every configured leave type.
    pub fn balance(&self, actor: &Actor, employee_id: &str) -> EngineResult<Vec<LeaveTypeBalance>> {
        authorization::authorize(actor, Operation::ViewBalance, employee_id)?;

        let mut balances = Vec::new();
        for leave_type in LeaveType::ALL {
            if let Ok(policy) = self.config.leave_policy(leave_type) {
                let balance = self.ledger.balance(employee_id, leave_type, policy);
                balances.push(LeaveTypeBalance::from_balance(leave_type, balance));
            }
        }
        Ok(balances)
    }
}
