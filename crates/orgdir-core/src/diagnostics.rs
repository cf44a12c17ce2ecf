//! Non-fatal findings raised while building the org chart.
//!
//! The resolver and assembler never log. They hand each [`Warning`] to the
//! [`DiagnosticSink`] supplied by the caller, which decides what to do with it.

use std::fmt;

use crate::id::{DepartmentId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
  /// Path resolution for `department` stopped early because `via` names a
  /// parent that is not in the department collection.
  DanglingParent {
    department: DepartmentId,
    via:        DepartmentId,
    parent:     DepartmentId,
  },
  /// An active user lists a department that does not exist.
  UnknownDepartment {
    user:       UserId,
    department: DepartmentId,
  },
  /// A department declares a head that is not among the active users.
  HeadNotFound {
    department: DepartmentId,
    head:       UserId,
  },
}

impl fmt::Display for Warning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DanglingParent { department, via, parent } => write!(
        f,
        "path of department {department} truncated: department {via} has unknown parent {parent}"
      ),
      Self::UnknownDepartment { user, department } => {
        write!(f, "user {user} belongs to unknown department {department}")
      }
      Self::HeadNotFound { department, head } => write!(
        f,
        "head {head} of department {department} is not an active user"
      ),
    }
  }
}

/// Receiver for [`Warning`]s.
pub trait DiagnosticSink {
  fn warn(&mut self, warning: Warning);
}

impl DiagnosticSink for Vec<Warning> {
  fn warn(&mut self, warning: Warning) { self.push(warning); }
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl DiagnosticSink for Discard {
  fn warn(&mut self, _warning: Warning) {}
}
