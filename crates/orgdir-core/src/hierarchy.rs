//! Ancestor-path resolution over the department tree.

use std::{
  collections::{HashMap, HashSet},
  fmt,
};

use serde::{Serialize, Serializer};

use crate::{
  Error, Result,
  diagnostics::{DiagnosticSink, Warning},
  id::DepartmentId,
  record::DepartmentRecord,
};

// ─── ResolvedPath ────────────────────────────────────────────────────────────

/// Ancestor names from the topmost ancestor down to the immediate parent.
///
/// Empty for a root department. Renders (and serialises) as the names joined
/// with [`ResolvedPath::SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPath(Vec<String>);

impl ResolvedPath {
  pub const SEPARATOR: &'static str = " -> ";

  pub fn segments(&self) -> &[String] { &self.0 }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl fmt::Display for ResolvedPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.join(Self::SEPARATOR))
  }
}

impl Serialize for ResolvedPath {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(self)
  }
}

impl From<Vec<String>> for ResolvedPath {
  fn from(segments: Vec<String>) -> Self { Self(segments) }
}

// ─── Hierarchy ───────────────────────────────────────────────────────────────

/// The department collection indexed by identifier.
pub struct Hierarchy<'a> {
  by_id: HashMap<DepartmentId, &'a DepartmentRecord>,
}

impl<'a> Hierarchy<'a> {
  /// Index `departments`. Fails if two records share an identifier.
  pub fn new(departments: &'a [DepartmentRecord]) -> Result<Self> {
    let mut by_id = HashMap::with_capacity(departments.len());
    for department in departments {
      if by_id.insert(department.id, department).is_some() {
        return Err(Error::DuplicateDepartment(department.id));
      }
    }
    Ok(Self { by_id })
  }

  pub fn get(&self, id: DepartmentId) -> Option<&'a DepartmentRecord> {
    self.by_id.get(&id).copied()
  }

  /// Walk up from `department`'s parent to the root, collecting names.
  ///
  /// A parent id with no matching record ends the walk and is reported as
  /// [`Warning::DanglingParent`]. Revisiting an id (including the starting
  /// department's own) is a cycle and aborts with
  /// [`Error::CyclicHierarchy`].
  pub fn ancestor_path(
    &self,
    department: &DepartmentRecord,
    sink: &mut dyn DiagnosticSink,
  ) -> Result<ResolvedPath> {
    let mut names = Vec::new();
    let mut visited = HashSet::from([department.id]);
    let mut current = department;

    while let Some(parent_id) = current.parent {
      if !visited.insert(parent_id) {
        return Err(Error::CyclicHierarchy {
          department: department.id,
          revisited:  parent_id,
        });
      }
      let Some(parent) = self.get(parent_id) else {
        sink.warn(Warning::DanglingParent {
          department: department.id,
          via:        current.id,
          parent:     parent_id,
        });
        break;
      };
      names.push(parent.name.clone());
      current = parent;
    }

    names.reverse();
    Ok(ResolvedPath(names))
  }
}

/// Resolve the ancestor path of `department` within `all_departments`.
///
/// Convenience wrapper that indexes the collection on every call; use
/// [`Hierarchy`] directly when resolving many departments.
pub fn resolve_ancestor_path(
  department: &DepartmentRecord,
  all_departments: &[DepartmentRecord],
  sink: &mut dyn DiagnosticSink,
) -> Result<ResolvedPath> {
  Hierarchy::new(all_departments)?.ancestor_path(department, sink)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::diagnostics::Discard;

  fn dept(id: u64, name: &str, parent: Option<u64>) -> DepartmentRecord {
    DepartmentRecord {
      id:     DepartmentId(id),
      name:   name.to_string(),
      parent: parent.map(DepartmentId),
      head:   None,
    }
  }

  fn chain(len: u64) -> Vec<DepartmentRecord> {
    (1..=len)
      .map(|i| dept(i, &format!("D{i}"), (i > 1).then(|| i - 1)))
      .collect()
  }

  #[test]
  fn root_resolves_to_empty_path() {
    let all = chain(1);
    let path = resolve_ancestor_path(&all[0], &all, &mut Discard).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.to_string(), "");
  }

  #[test]
  fn three_level_chain() {
    let all = vec![
      dept(1, "Root", None),
      dept(2, "Div", Some(1)),
      dept(3, "Team", Some(2)),
    ];
    let path = resolve_ancestor_path(&all[2], &all, &mut Discard).unwrap();
    assert_eq!(path.to_string(), "Root -> Div");
  }

  #[test]
  fn chain_of_n_has_n_minus_one_segments() {
    for n in 1..=8 {
      let all = chain(n);
      let deepest = all.last().unwrap();
      let path = resolve_ancestor_path(deepest, &all, &mut Discard).unwrap();
      assert_eq!(path.segments().len() as u64, n - 1);
      let expected: Vec<_> = (1..n).map(|i| format!("D{i}")).collect();
      assert_eq!(path.segments(), expected.as_slice());
    }
  }

  #[test]
  fn record_order_does_not_matter() {
    let mut all = chain(4);
    all.reverse();
    let team = all.iter().find(|d| d.id == DepartmentId(4)).unwrap();
    let path = resolve_ancestor_path(team, &all, &mut Discard).unwrap();
    assert_eq!(path.to_string(), "D1 -> D2 -> D3");
  }

  #[test]
  fn dangling_parent_terminates_with_warning() {
    let all = vec![dept(2, "Div", Some(99)), dept(3, "Team", Some(2))];
    let mut warnings: Vec<Warning> = Vec::new();
    let path = resolve_ancestor_path(&all[1], &all, &mut warnings).unwrap();

    assert_eq!(path.to_string(), "Div");
    assert_eq!(warnings, vec![Warning::DanglingParent {
      department: DepartmentId(3),
      via:        DepartmentId(2),
      parent:     DepartmentId(99),
    }]);
  }

  #[test]
  fn cycle_is_an_integrity_error() {
    let all = vec![
      dept(1, "A", Some(3)),
      dept(2, "B", Some(1)),
      dept(3, "C", Some(2)),
    ];
    let err = resolve_ancestor_path(&all[0], &all, &mut Discard).unwrap_err();
    assert!(matches!(err, Error::CyclicHierarchy {
      department: DepartmentId(1),
      revisited:  DepartmentId(1),
    }));
  }

  #[test]
  fn self_parent_is_a_cycle() {
    let all = vec![dept(5, "Loop", Some(5))];
    let err = resolve_ancestor_path(&all[0], &all, &mut Discard).unwrap_err();
    assert!(matches!(err, Error::CyclicHierarchy { .. }));
  }

  #[test]
  fn cycle_above_target_is_detected() {
    let all = vec![
      dept(1, "A", Some(2)),
      dept(2, "B", Some(1)),
      dept(3, "Leaf", Some(1)),
    ];
    let err = resolve_ancestor_path(&all[2], &all, &mut Discard).unwrap_err();
    assert!(matches!(err, Error::CyclicHierarchy {
      department: DepartmentId(3),
      revisited:  DepartmentId(1),
    }));
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let all = vec![dept(1, "A", None), dept(1, "B", None)];
    assert!(matches!(
      Hierarchy::new(&all),
      Err(Error::DuplicateDepartment(DepartmentId(1)))
    ));
  }

  #[test]
  fn path_serialises_as_joined_string() {
    let path = ResolvedPath::from(vec!["HQ".to_string(), "Eng".to_string()]);
    assert_eq!(serde_json::to_string(&path).unwrap(), "\"HQ -> Eng\"");
  }
}
