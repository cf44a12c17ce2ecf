//! Core types and the hierarchy-construction algorithm for `orgdir`.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies. It
//! turns the flat user and department collections of an HR directory into an
//! [`OrgChart`]: one entry per department with its ancestor path, its head
//! and its members.
//!
//! Non-fatal data problems are reported through a caller-supplied
//! [`DiagnosticSink`]; integrity defects abort with an [`Error`].

pub mod assemble;
pub mod diagnostics;
pub mod error;
pub mod hierarchy;
pub mod id;
pub mod org;
pub mod record;

pub use assemble::assemble;
pub use diagnostics::{DiagnosticSink, Discard, Warning};
pub use error::{Error, Result};
pub use hierarchy::{Hierarchy, ResolvedPath, resolve_ancestor_path};
pub use id::{DepartmentId, RawId, UserId};
pub use org::{Contact, Member, OrgChart, OrgEntry};
pub use record::{DepartmentRecord, RawDepartment, RawUser, UserRecord};
