//! Combining users and departments into an [`OrgChart`].

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
  Error, Result,
  diagnostics::{DiagnosticSink, Warning},
  hierarchy::Hierarchy,
  id::{DepartmentId, UserId},
  org::{Contact, Member, OrgChart, OrgEntry},
  record::{DepartmentRecord, UserRecord},
};

/// Build one [`OrgEntry`] per department.
///
/// Inactive users are ignored. An active user whose id matches a
/// department's declared head becomes that department's head whether or not
/// the user lists the department among its memberships. Every other
/// membership adds the user to the department's members; a department's
/// declared head is never added as its member.
///
/// Unknown departments in a membership list and heads that match no active
/// user are reported to `sink`. Duplicate ids and parent cycles are errors.
pub fn assemble(
  users: &[UserRecord],
  departments: &[DepartmentRecord],
  sink: &mut dyn DiagnosticSink,
) -> Result<OrgChart> {
  let hierarchy = Hierarchy::new(departments)?;

  let mut entries = BTreeMap::new();
  let mut headed: HashMap<UserId, Vec<DepartmentId>> = HashMap::new();
  for department in departments {
    let path = hierarchy.ancestor_path(department, sink)?;
    entries.insert(department.id, OrgEntry::new(department, path));
    if let Some(head) = department.head {
      headed.entry(head).or_default().push(department.id);
    }
  }

  let mut seen = HashSet::with_capacity(users.len());
  for user in users {
    if !seen.insert(user.id) {
      return Err(Error::DuplicateUser(user.id));
    }
    if !user.active {
      continue;
    }

    for department in headed.get(&user.id).into_iter().flatten() {
      if let Some(entry) = entries.get_mut(department) {
        entry.head = Some(Contact::from(user));
      }
    }

    for &department in &user.departments {
      let Some(entry) = entries.get_mut(&department) else {
        sink.warn(Warning::UnknownDepartment {
          user: user.id,
          department,
        });
        continue;
      };
      if !entry.is_declared_head(user.id) {
        entry.members.insert(user.id, Member::from(user));
      }
    }
  }

  for entry in entries.values() {
    if let (Some(head), None) = (entry.head_id, &entry.head) {
      sink.warn(Warning::HeadNotFound {
        department: entry.id,
        head,
      });
    }
  }

  Ok(OrgChart::from_entries(entries))
}
