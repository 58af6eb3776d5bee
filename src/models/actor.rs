//! Authenticated actor model.
//!
//! The auth subsystem is an external collaborator; the engine consumes its
//! output as an opaque actor context of employee id, role, and optional
//! department.

use serde::{Deserialize, Serialize};

/// Represents the role an authenticated actor holds in the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular employee; may act only on their own records.
    Employee,
    /// An HR user; may view any record and decide leave requests.
    Hr,
    /// An administrator; may additionally cancel other employees' requests.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Hr => write!(f, "hr"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// The authenticated actor on whose behalf an operation runs.
///
/// Produced by the auth subsystem and attached to every request. The
/// engine never authenticates; it only authorizes against this context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// The actor's employee id.
    pub employee_id: String,
    /// The actor's role.
    pub role: Role,
    /// The actor's department, used to resolve shift configuration.
    #[serde(default)]
    pub department: Option<String>,
}
