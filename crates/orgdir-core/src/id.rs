//! Identifier types.
//!
//! The directory service is loose about identifier types: the same field can
//! arrive as a JSON number in one record and as a numeric string in another.
//! [`RawId`] captures whatever was on the wire; [`UserId`] and
//! [`DepartmentId`] are the canonical forms every comparison uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Canonical identifiers ───────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DepartmentId(pub u64);

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl fmt::Display for DepartmentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// ─── Wire identifiers ────────────────────────────────────────────────────────

/// An identifier as it appeared in the source JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
  Number(serde_json::Number),
  Text(String),
}

impl RawId {
  /// Normalise to an unsigned integer.
  ///
  /// `field` names the source field in the resulting error. Negative,
  /// fractional and non-numeric values are rejected, never coerced.
  pub fn to_u64(&self, field: &'static str) -> Result<u64> {
    let parsed = match self {
      Self::Number(n) => n.as_u64(),
      Self::Text(s) => s.trim().parse::<u64>().ok(),
    };
    parsed.ok_or_else(|| Error::MalformedId {
      field,
      value: self.to_string(),
    })
  }

  pub fn to_user_id(&self, field: &'static str) -> Result<UserId> {
    self.to_u64(field).map(UserId)
  }

  pub fn to_department_id(&self, field: &'static str) -> Result<DepartmentId> {
    self.to_u64(field).map(DepartmentId)
  }
}

impl fmt::Display for RawId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Number(n) => fmt::Display::fmt(n, f),
      Self::Text(s) => f.write_str(s),
    }
  }
}
