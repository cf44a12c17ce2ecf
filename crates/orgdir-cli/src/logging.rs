//! Tracing setup and the diagnostic sink that forwards to it.

use std::{
  fs::{self, File},
  path::{Path, PathBuf},
  str::FromStr,
  sync::Mutex,
};

use anyhow::Context as _;
use orgdir_core::{DiagnosticSink, Warning};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Parse a configured level. Accepts tracing's names plus the `warning` and
/// `critical` spellings found in older config files.
pub fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
  let normalised = match level.trim().to_ascii_lowercase().as_str() {
    "warning" => "warn".to_string(),
    "critical" | "fatal" => "error".to_string(),
    other => other.to_string(),
  };
  LevelFilter::from_str(&normalised)
    .with_context(|| format!("unknown log level {level:?}"))
}

/// Install a subscriber writing to stderr and to
/// `<log_dir>/orgdir_<stamp>.log`. `RUST_LOG` overrides `level`.
///
/// Returns the log file path.
pub fn init(log_dir: &Path, level: &str, stamp: &str) -> anyhow::Result<PathBuf> {
  fs::create_dir_all(log_dir)
    .with_context(|| format!("creating log directory {}", log_dir.display()))?;
  let path = log_dir.join(format!("orgdir_{stamp}.log"));
  let file = File::create(&path)
    .with_context(|| format!("creating log file {}", path.display()))?;

  let filter = EnvFilter::builder()
    .with_default_directive(parse_level(level)?.into())
    .from_env_lossy();

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
    .try_init()
    .context("installing tracing subscriber")?;

  Ok(path)
}

/// Logs every [`Warning`] at `warn` level and counts them.
#[derive(Debug, Default)]
pub struct TracingSink {
  pub count: usize,
}

impl DiagnosticSink for TracingSink {
  fn warn(&mut self, warning: Warning) {
    self.count += 1;
    match &warning {
      Warning::DanglingParent { department, via, parent } => tracing::warn!(
        department = department.0,
        via = via.0,
        parent = parent.0,
        "{warning}"
      ),
      Warning::UnknownDepartment { user, department } => tracing::warn!(
        user = user.0,
        department = department.0,
        "{warning}"
      ),
      Warning::HeadNotFound { department, head } => tracing::warn!(
        department = department.0,
        head = head.0,
        "{warning}"
      ),
    }
  }
}
