//! Flattened tabular report.
//!
//! Produces CRLF line endings and quotes a field only when it contains a
//! comma, a double quote or a line break.

use orgdir_core::{DepartmentId, OrgChart};

pub const HEADER: [&str; 4] = ["Company", "Head", "Employees", "Email"];

// ─── Rows ─────────────────────────────────────────────────────────────────────

/// One line of the report below the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
  pub company:  String,
  pub head:     String,
  pub employee: String,
  pub email:    String,
}

impl Row {
  fn fields(&self) -> [&str; 4] {
    [
      self.company.as_str(),
      self.head.as_str(),
      self.employee.as_str(),
      self.email.as_str(),
    ]
  }
}

/// Flatten `chart` into report rows.
///
/// A department with a head yields the head row followed by one row per
/// member with the company and head cells left blank. A department without a
/// head yields one row per member, each carrying the company path. Empty
/// departments yield nothing.
pub fn rows(chart: &OrgChart, root: DepartmentId) -> Vec<Row> {
  let mut out = Vec::new();

  for entry in chart.entries() {
    let company = chart.display_path(entry, root);

    if let Some(head) = &entry.head {
      out.push(Row {
        company:  company.clone(),
        head:     head.full_name(),
        employee: String::new(),
        email:    head.email.clone(),
      });
    }

    // Members continue under the head row without repeating the path.
    let member_company = if entry.head.is_some() {
      String::new()
    } else {
      company
    };
    for member in entry.members.values() {
      out.push(Row {
        company:  member_company.clone(),
        head:     String::new(),
        employee: member.contact.full_name(),
        email:    member.contact.email.clone(),
      });
    }
  }

  out
}

// ─── Encoding ─────────────────────────────────────────────────────────────────

fn escape_field(s: &str) -> String {
  if s.contains([',', '"', '\r', '\n']) {
    format!("\"{}\"", s.replace('"', "\"\""))
  } else {
    s.to_string()
  }
}

fn encode_line(out: &mut String, fields: &[&str]) {
  let encoded: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
  out.push_str(&encoded.join(","));
  out.push_str("\r\n");
}

/// Render `chart` as the complete CSV document, header included.
pub fn to_csv(chart: &OrgChart, root: DepartmentId) -> String {
  let mut out = String::new();
  encode_line(&mut out, &HEADER);
  for row in rows(chart, root) {
    encode_line(&mut out, &row.fields());
  }
  out
}

#[cfg(test)]
mod tests {
  use orgdir_core::{DepartmentRecord, Discard, UserId, UserRecord, assemble};

  use super::*;

  fn dept(id: u64, name: &str, parent: Option<u64>, head: Option<u64>) -> DepartmentRecord {
    DepartmentRecord {
      id:     DepartmentId(id),
      name:   name.to_string(),
      parent: parent.map(DepartmentId),
      head:   head.map(UserId),
    }
  }

  fn user(id: u64, name: &str, last: &str, depts: &[u64]) -> UserRecord {
    UserRecord {
      id:          UserId(id),
      name:        name.to_string(),
      last_name:   last.to_string(),
      email:       format!("{}@x.com", name.to_lowercase()),
      active:      true,
      user_type:   "employee".to_string(),
      departments: depts.iter().copied().map(DepartmentId).collect(),
    }
  }

  fn chart(users: &[UserRecord], departments: &[DepartmentRecord]) -> OrgChart {
    assemble(users, departments, &mut Discard).unwrap()
  }

  fn row(company: &str, head: &str, employee: &str, email: &str) -> Row {
    Row {
      company:  company.into(),
      head:     head.into(),
      employee: employee.into(),
      email:    email.into(),
    }
  }

  #[test]
  fn head_row_then_member_continuation_rows() {
    let c = chart(
      &[
        user(10, "Ann", "Lee", &[2]),
        user(11, "Bo", "Kim", &[2]),
        user(12, "Cy", "Orr", &[2]),
      ],
      &[dept(1, "HQ", None, None), dept(2, "Eng", Some(1), Some(10))],
    );

    assert_eq!(rows(&c, DepartmentId(1)), vec![
      row("HQ", "Ann Lee", "", "ann@x.com"),
      row("", "", "Bo Kim", "bo@x.com"),
      row("", "", "Cy Orr", "cy@x.com"),
    ]);
  }

  #[test]
  fn headless_department_repeats_path_per_member() {
    let c = chart(
      &[user(11, "Bo", "Kim", &[3]), user(12, "Cy", "Orr", &[3])],
      &[
        dept(1, "HQ", None, None),
        dept(2, "Div", Some(1), None),
        dept(3, "Team", Some(2), None),
      ],
    );

    assert_eq!(rows(&c, DepartmentId(1)), vec![
      row("HQ -> Div", "", "Bo Kim", "bo@x.com"),
      row("HQ -> Div", "", "Cy Orr", "cy@x.com"),
    ]);
  }

  #[test]
  fn unmatched_head_falls_back_to_member_rows() {
    let c = chart(
      &[user(11, "Bo", "Kim", &[2])],
      &[dept(1, "HQ", None, None), dept(2, "Eng", Some(1), Some(99))],
    );

    assert_eq!(rows(&c, DepartmentId(1)), vec![row(
      "HQ", "", "Bo Kim", "bo@x.com"
    )]);
  }

  #[test]
  fn root_head_row_uses_root_name() {
    let c = chart(&[user(10, "Ann", "Lee", &[1])], &[dept(
      1,
      "HQ",
      None,
      Some(10),
    )]);

    assert_eq!(rows(&c, DepartmentId(1)), vec![row(
      "HQ", "Ann Lee", "", "ann@x.com"
    )]);
  }

  #[test]
  fn empty_departments_emit_nothing() {
    let c = chart(&[], &[dept(1, "HQ", None, None)]);
    assert!(rows(&c, DepartmentId(1)).is_empty());
    assert_eq!(to_csv(&c, DepartmentId(1)), "Company,Head,Employees,Email\r\n");
  }

  #[test]
  fn document_has_header_and_crlf_rows() {
    let c = chart(
      &[user(10, "Ann", "Lee", &[2]), user(11, "Bo", "Kim", &[2])],
      &[dept(1, "HQ", None, None), dept(2, "Eng", Some(1), Some(10))],
    );

    assert_eq!(
      to_csv(&c, DepartmentId(1)),
      "Company,Head,Employees,Email\r\n\
       HQ,Ann Lee,,ann@x.com\r\n\
       ,,Bo Kim,bo@x.com\r\n"
    );
  }

  #[test]
  fn fields_with_commas_and_quotes_are_quoted() {
    assert_eq!(escape_field("plain"), "plain");
    assert_eq!(escape_field("Sales, EMEA"), "\"Sales, EMEA\"");
    assert_eq!(escape_field("the \"A\" team"), "\"the \"\"A\"\" team\"");
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
  }
}
