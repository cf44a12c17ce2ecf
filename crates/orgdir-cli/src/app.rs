//! One batch run: fetch, assemble, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use orgdir_core::{
  DepartmentId, assemble,
  record::{normalize_departments, normalize_users},
};
use orgdir_report::OutputDir;
use tracing::info;

use crate::{client::DirectoryClient, logging::TracingSink};

/// What a finished run produced.
#[derive(Debug)]
pub struct Summary {
  pub departments: usize,
  pub users:       usize,
  pub warnings:    usize,
  pub org_json:    PathBuf,
  pub csv:         PathBuf,
}

/// Fetch both collections, build the org chart, and write the outputs.
///
/// Nothing is written unless both fetches succeed. The org dump and the CSV
/// report are written only after assembly succeeds, and only as a pair.
pub async fn run(
  client: &DirectoryClient,
  out: &OutputDir,
  root: DepartmentId,
  dump_raw: bool,
) -> Result<Summary> {
  info!("Retrieving users");
  let users = client.list_users().await?;
  info!("Retrieving departments");
  let departments = client.list_departments().await?;

  if dump_raw {
    let path = out
      .write_json("bitrix24_all_user_data", &users.raw)
      .context("writing raw user dump")?;
    info!(path = %path.display(), "Wrote raw user dump");
    let path = out
      .write_json("bitrix24_department_data", &departments.raw)
      .context("writing raw department dump")?;
    info!(path = %path.display(), "Wrote raw department dump");
  }

  let users = normalize_users(users.records).context("normalising users")?;
  let departments =
    normalize_departments(departments.records).context("normalising departments")?;

  info!(
    users = users.len(),
    departments = departments.len(),
    "Combining users with departments"
  );
  let mut sink = TracingSink::default();
  let chart = assemble(&users, &departments, &mut sink)
    .context("building org chart")?;

  let (org_json, csv) = out
    .write_report("bitrix24_org", "org", &chart, root)
    .context("writing org dump and CSV report")?;
  info!(path = %org_json.display(), "Wrote org dump");
  info!(path = %csv.display(), "Wrote CSV of organisation");

  Ok(Summary {
    departments: chart.len(),
    users: users.len(),
    warnings: sink.count,
    org_json,
    csv,
  })
}
