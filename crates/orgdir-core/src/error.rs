//! Error types for `orgdir-core`.

use thiserror::Error;

use crate::id::{DepartmentId, UserId};

#[derive(Debug, Error)]
pub enum Error {
  /// An identifier was neither a non-negative integer nor a numeric string.
  #[error("malformed identifier in {field}: {value:?}")]
  MalformedId { field: &'static str, value: String },

  #[error("duplicate department id: {0}")]
  DuplicateDepartment(DepartmentId),

  #[error("duplicate user id: {0}")]
  DuplicateUser(UserId),

  #[error(
    "department parent chain loops: resolving {department} revisited {revisited}"
  )]
  CyclicHierarchy {
    department: DepartmentId,
    revisited:  DepartmentId,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
