//! User and department records.
//!
//! `Raw*` types mirror the Bitrix24 REST payloads field for field. They are
//! converted into [`UserRecord`] and [`DepartmentRecord`] at the boundary so
//! the resolver and assembler only ever see canonical identifiers.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
  Result,
  id::{DepartmentId, RawId, UserId},
};

// ─── Wire records ────────────────────────────────────────────────────────────

/// A user as returned by `user.get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
  #[serde(rename = "ID")]
  pub id:          RawId,
  #[serde(rename = "NAME", default)]
  pub name:        Option<String>,
  #[serde(rename = "LAST_NAME", default)]
  pub last_name:   Option<String>,
  #[serde(rename = "EMAIL", default)]
  pub email:       Option<String>,
  #[serde(rename = "ACTIVE", default)]
  pub active:      bool,
  #[serde(rename = "USER_TYPE", default)]
  pub user_type:   Option<String>,
  #[serde(
    rename = "UF_DEPARTMENT",
    default,
    deserialize_with = "memberships"
  )]
  pub departments: Vec<RawId>,
}

/// A department as returned by `department.get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDepartment {
  #[serde(rename = "ID")]
  pub id:     RawId,
  #[serde(rename = "NAME", default)]
  pub name:   Option<String>,
  #[serde(rename = "PARENT", default)]
  pub parent: Option<RawId>,
  #[serde(rename = "UF_HEAD", default)]
  pub head:   Option<RawId>,
}

/// `UF_DEPARTMENT` is usually a list, but some user types carry `null`,
/// `false` or a bare scalar instead.
fn memberships<'de, D>(deserializer: D) -> Result<Vec<RawId>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Shape {
    List(Vec<RawId>),
    Single(RawId),
    Flag(bool),
  }

  Ok(match Option::<Shape>::deserialize(deserializer)? {
    Some(Shape::List(ids)) => ids,
    Some(Shape::Single(id)) => vec![id],
    Some(Shape::Flag(_)) | None => Vec::new(),
  })
}

// ─── Canonical records ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
  pub id:          UserId,
  pub name:        String,
  pub last_name:   String,
  pub email:       String,
  pub active:      bool,
  pub user_type:   String,
  pub departments: Vec<DepartmentId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRecord {
  pub id:     DepartmentId,
  pub name:   String,
  /// `None` marks a root department.
  pub parent: Option<DepartmentId>,
  pub head:   Option<UserId>,
}

impl TryFrom<RawUser> for UserRecord {
  type Error = crate::Error;

  fn try_from(raw: RawUser) -> Result<Self> {
    let departments = raw
      .departments
      .iter()
      .map(|d| d.to_department_id("UF_DEPARTMENT"))
      .collect::<Result<_>>()?;

    Ok(Self {
      id: raw.id.to_user_id("user ID")?,
      name: raw.name.unwrap_or_default(),
      last_name: raw.last_name.unwrap_or_default(),
      email: raw.email.unwrap_or_default(),
      active: raw.active,
      user_type: raw.user_type.unwrap_or_default(),
      departments,
    })
  }
}

impl TryFrom<RawDepartment> for DepartmentRecord {
  type Error = crate::Error;

  fn try_from(raw: RawDepartment) -> Result<Self> {
    Ok(Self {
      id:     raw.id.to_department_id("department ID")?,
      name:   raw.name.unwrap_or_default(),
      parent: raw
        .parent
        .map(|p| p.to_department_id("PARENT"))
        .transpose()?,
      head:   raw.head.map(|h| h.to_user_id("UF_HEAD")).transpose()?,
    })
  }
}

/// Normalise a whole user collection, failing on the first malformed id.
pub fn normalize_users(raw: Vec<RawUser>) -> Result<Vec<UserRecord>> {
  raw.into_iter().map(UserRecord::try_from).collect()
}

/// Normalise a whole department collection, failing on the first malformed id.
pub fn normalize_departments(
  raw: Vec<RawDepartment>,
) -> Result<Vec<DepartmentRecord>> {
  raw.into_iter().map(DepartmentRecord::try_from).collect()
}
