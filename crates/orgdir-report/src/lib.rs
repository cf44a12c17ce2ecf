//! Report writers for `orgdir`.
//!
//! Turns an assembled [`orgdir_core::OrgChart`] into the two run artifacts
//! (a pretty JSON dump and a flattened CSV report) and writes raw fetch
//! dumps alongside them. Pure synchronous; no HTTP dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use orgdir_core::{DepartmentId, Discard, assemble};
//! use orgdir_report::OutputDir;
//!
//! let chart = assemble(&[], &[], &mut Discard).unwrap();
//! let out = OutputDir::create("out", "20240101-000000").unwrap();
//! out.write_csv("org", &chart, DepartmentId(1)).unwrap();
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod output;

pub use csv::{Row, rows, to_csv};
pub use error::{Error, Result};
pub use json::to_pretty_json;
pub use output::{OutputDir, run_stamp};
