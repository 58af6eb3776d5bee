//! Capability checks for gateway operations.
//!
//! Role-based branching lives here and nowhere else: every operation names
//! the roles that may perform it on any employee's entity, plus whether the
//! owning employee may perform it on their own. Handlers and lifecycle
//! functions never inspect roles themselves.

use crate::error::{EngineError, EngineResult};
use crate::models::{Actor, Role};

/// The operations the gateway exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Open today's attendance record.
    CheckIn,
    /// Close today's attendance record.
    CheckOut,
    /// Read an attendance record and its derived status.
    ViewAttendance,
    /// Submit a leave request.
    SubmitLeave,
    /// Read a leave request.
    ViewLeave,
    /// Approve or reject a pending leave request.
    DecideLeave,
    /// Cancel a leave request.
    CancelLeave,
    /// Read an employee's leave balances.
    ViewBalance,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::CheckIn => "check-in",
            Operation::CheckOut => "check-out",
            Operation::ViewAttendance => "view attendance",
            Operation::SubmitLeave => "submit leave",
            Operation::ViewLeave => "view leave",
            Operation::DecideLeave => "decide leave",
            Operation::CancelLeave => "cancel leave",
            Operation::ViewBalance => "view balance",
        };
        f.write_str(name)
    }
}

/// The roles that may perform an operation on any employee's entity.
pub fn allowed_roles(operation: Operation) -> &'static [Role] {
    match operation {
        Operation::CheckIn | Operation::CheckOut | Operation::SubmitLeave => &[],
        Operation::ViewAttendance | Operation::ViewLeave | Operation::ViewBalance => {
            &[Role::Hr, Role::Admin]
        }
        Operation::DecideLeave => &[Role::Hr, Role::Admin],
        // Cancellation is self-service or admin; HR may not cancel on
        // an employee's behalf.
        Operation::CancelLeave => &[Role::Admin],
    }
}

/// Whether the owning employee may perform the operation on their own entity.
fn self_service(operation: Operation) -> bool {
    !matches!(operation, Operation::DecideLeave)
}

/// Checks that the actor may perform `operation` on the entity owned by
/// `target_employee_id`.
///
/// # Errors
///
/// Returns `Unauthorized` when the actor's role does not cover the
/// operation and the actor is not the owning employee of a self-service
/// operation.
pub fn authorize(actor: &Actor, operation: Operation, target_employee_id: &str) -> EngineResult<()> {
    if allowed_roles(operation).contains(&actor.role) {
        return Ok(());
    }

    if self_service(operation) && actor.employee_id == target_employee_id {
        return Ok(());
    }

    Err(EngineError::Unauthorized {
        message: format!(
            "role '{}' may not {} for employee '{}'",
            actor.role, operation, target_employee_id
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(employee_id: &str, role: Role) -> Actor {
        Actor {
            employee_id: employee_id.to_string(),
            role,
            department: None,
        }
    }

    #[test]
    fn test_employee_can_check_in_for_self() {
        let result = authorize(&actor("emp_001", Role::Employee), Operation::CheckIn, "emp_001");
        assert!(result.is_ok());
    }

    #[test]
    fn test_nobody_checks_in_for_another_employee() {
        for role in [Role::Employee, Role::Hr, Role::Admin] {
            let result = authorize(&actor("emp_001", role), Operation::CheckIn, "emp_002");
            assert!(result.is_err(), "role {:?} should not check in for others", role);
        }
    }

    #[test]
    fn test_employee_views_only_own_attendance() {
        assert!(
            authorize(
                &actor("emp_001", Role::Employee),
                Operation::ViewAttendance,
                "emp_001"
            )
            .is_ok()
        );
        assert!(
            authorize(
                &actor("emp_001", Role::Employee),
                Operation::ViewAttendance,
                "emp_002"
            )
            .is_err()
        );
    }

    #[test]
    fn test_hr_views_any_attendance() {
        assert!(
            authorize(&actor("hr_001", Role::Hr), Operation::ViewAttendance, "emp_002").is_ok()
        );
    }

    #[test]
    fn test_only_hr_and_admin_decide() {
        assert!(
            authorize(&actor("hr_001", Role::Hr), Operation::DecideLeave, "emp_002").is_ok()
        );
        assert!(
            authorize(&actor("adm_001", Role::Admin), Operation::DecideLeave, "emp_002").is_ok()
        );
        assert!(
            authorize(
                &actor("emp_001", Role::Employee),
                Operation::DecideLeave,
                "emp_002"
            )
            .is_err()
        );
    }

    #[test]
    fn test_deciding_is_never_self_service() {
        // An employee cannot decide even their own request by ownership.
        let result = authorize(
            &actor("emp_001", Role::Employee),
            Operation::DecideLeave,
            "emp_001",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cancel_is_owner_or_admin_but_not_hr() {
        assert!(
            authorize(
                &actor("emp_001", Role::Employee),
                Operation::CancelLeave,
                "emp_001"
            )
            .is_ok()
        );
        assert!(
            authorize(&actor("adm_001", Role::Admin), Operation::CancelLeave, "emp_001").is_ok()
        );
        assert!(
            authorize(&actor("hr_001", Role::Hr), Operation::CancelLeave, "emp_001").is_err()
        );
    }

    #[test]
    fn test_unauthorized_error_names_the_operation() {
        let error = authorize(
            &actor("emp_001", Role::Employee),
            Operation::DecideLeave,
            "emp_002",
        )
        .unwrap_err();
        assert!(error.to_string().contains("decide leave"));
    }
}
