//! The assembled org chart.
//!
//! These types are never fetched or stored; they are derived fresh on every
//! run by [`crate::assemble`] and handed to the report writers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
  hierarchy::ResolvedPath,
  id::{DepartmentId, UserId},
  record::{DepartmentRecord, UserRecord},
};

// ─── People ──────────────────────────────────────────────────────────────────

/// The condensed view of a user stored on an org entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
  pub id:        UserId,
  pub name:      String,
  pub last_name: String,
  pub email:     String,
}

impl Contact {
  /// `"{name} {last_name}"`.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.name, self.last_name)
  }
}

impl From<&UserRecord> for Contact {
  fn from(user: &UserRecord) -> Self {
    Self {
      id:        user.id,
      name:      user.name.clone(),
      last_name: user.last_name.clone(),
      email:     user.email.clone(),
    }
  }
}

/// A regular (non-head) member of a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
  #[serde(flatten)]
  pub contact:   Contact,
  pub user_type: String,
}

impl From<&UserRecord> for Member {
  fn from(user: &UserRecord) -> Self {
    Self {
      contact:   Contact::from(user),
      user_type: user.user_type.clone(),
    }
  }
}

// ─── Entries ─────────────────────────────────────────────────────────────────

/// One department with its resolved path, head and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgEntry {
  pub id:      DepartmentId,
  pub name:    String,
  pub parent:  Option<DepartmentId>,
  /// The head the department declares, whether or not it was found.
  pub head_id: Option<UserId>,
  pub path:    ResolvedPath,
  /// Present only when the declared head is an active user.
  pub head:    Option<Contact>,
  pub members: BTreeMap<UserId, Member>,
}

impl OrgEntry {
  /// An entry with no head and no members yet.
  pub fn new(department: &DepartmentRecord, path: ResolvedPath) -> Self {
    Self {
      id: department.id,
      name: department.name.clone(),
      parent: department.parent,
      head_id: department.head,
      path,
      head: None,
      members: BTreeMap::new(),
    }
  }

  pub fn is_root(&self) -> bool { self.parent.is_none() }

  /// Whether `user` is the head this department declares.
  pub fn is_declared_head(&self, user: UserId) -> bool {
    self.head_id == Some(user)
  }
}

// ─── Chart ───────────────────────────────────────────────────────────────────

/// Every department's entry, keyed and ordered by department id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrgChart {
  entries: BTreeMap<DepartmentId, OrgEntry>,
}

impl OrgChart {
  pub(crate) fn from_entries(entries: BTreeMap<DepartmentId, OrgEntry>) -> Self {
    Self { entries }
  }

  pub fn get(&self, id: DepartmentId) -> Option<&OrgEntry> {
    self.entries.get(&id)
  }

  pub fn entries(&self) -> impl Iterator<Item = &OrgEntry> {
    self.entries.values()
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// The path shown for `entry` in reports.
  ///
  /// A root department, or any department named like the department with
  /// id `root`, is shown under its own name. Everything else shows its
  /// resolved ancestor path.
  pub fn display_path(&self, entry: &OrgEntry, root: DepartmentId) -> String {
    let named_like_root = self
      .get(root)
      .is_some_and(|root_entry| root_entry.name == entry.name);
    if named_like_root || entry.is_root() {
      entry.name.clone()
    } else {
      entry.path.to_string()
    }
  }
}
