//! Timestamped output files.
//!
//! Every file written during one run shares the same timestamp suffix, so a
//! run's raw dumps, org dump and CSV report sort together on disk.

use std::{
  fs,
  path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};
use orgdir_core::{DepartmentId, OrgChart};
use serde::Serialize;

use crate::{
  csv,
  error::{Error, Result},
  json,
};

/// `YYYYmmdd-HHMMSS`.
pub fn run_stamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
  Tz::Offset: std::fmt::Display,
{
  at.format("%Y%m%d-%H%M%S").to_string()
}

/// A directory that receives `<stem>_<stamp>.<ext>` files.
#[derive(Debug, Clone)]
pub struct OutputDir {
  root:  PathBuf,
  stamp: String,
}

impl OutputDir {
  /// Use `root`, creating it if it does not exist.
  pub fn create(root: impl Into<PathBuf>, stamp: impl Into<String>) -> Result<Self> {
    let root = root.into();
    fs::create_dir_all(&root).map_err(|source| Error::Io {
      path: root.clone(),
      source,
    })?;
    Ok(Self {
      root,
      stamp: stamp.into(),
    })
  }

  pub fn path_for(&self, stem: &str, ext: &str) -> PathBuf {
    self.root.join(format!("{stem}_{}.{ext}", self.stamp))
  }

  /// Pretty-print `value` to `<stem>_<stamp>.json`.
  pub fn write_json<T: Serialize + ?Sized>(
    &self,
    stem: &str,
    value: &T,
  ) -> Result<PathBuf> {
    let path = self.path_for(stem, "json");
    write(&path, json::to_pretty_json(value)?)?;
    Ok(path)
  }

  /// Render the CSV report of `chart` to `<stem>_<stamp>.csv`.
  pub fn write_csv(
    &self,
    stem: &str,
    chart: &OrgChart,
    root: DepartmentId,
  ) -> Result<PathBuf> {
    let path = self.path_for(stem, "csv");
    write(&path, csv::to_csv(chart, root))?;
    Ok(path)
  }

  /// Write the org dump (`<json_stem>_<stamp>.json`) and the CSV report
  /// (`<csv_stem>_<stamp>.csv`) as a pair.
  ///
  /// Both documents are rendered before either file is touched. If the CSV
  /// cannot be written the org dump is removed again, so a run leaves both
  /// or neither.
  pub fn write_report(
    &self,
    json_stem: &str,
    csv_stem: &str,
    chart: &OrgChart,
    root: DepartmentId,
  ) -> Result<(PathBuf, PathBuf)> {
    let org_json = json::to_pretty_json(chart)?;
    let org_csv = csv::to_csv(chart, root);

    let json_path = self.path_for(json_stem, "json");
    let csv_path = self.path_for(csv_stem, "csv");
    write(&json_path, org_json)?;
    if let Err(err) = write(&csv_path, org_csv) {
      let _ = fs::remove_file(&json_path);
      return Err(err);
    }
    Ok((json_path, csv_path))
  }
}

fn write(path: &Path, contents: String) -> Result<()> {
  fs::write(path, contents).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })
}
