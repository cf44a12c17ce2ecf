//! `orgdir`: builds an organisation report from a Bitrix24 directory.
//!
//! # Usage
//!
//! ```text
//! orgdir --config orgdir.toml
//! orgdir -c ~/.config/orgdir.ini --output reports/ --no-dump
//! ```
//!
//! Each run fetches all users and departments, writes the raw responses, the
//! assembled org chart as JSON and a flattened CSV report into the output
//! directory, and logs to a timestamped file in the log directory.

mod app;
mod client;
mod logging;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use client::DirectoryClient;
use orgdir_report::{OutputDir, run_stamp};
use settings::{Settings, expand_tilde};
use tracing::info;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "orgdir",
  version,
  about = "Combine Bitrix24 users and departments into an org report"
)]
struct Cli {
  /// Path to the configuration file (TOML, INI, JSON or YAML).
  #[arg(short, long, value_name = "FILE", default_value = "orgdir.toml")]
  config: PathBuf,

  /// Override the output directory from the config file.
  #[arg(short, long, value_name = "DIR")]
  output: Option<PathBuf>,

  /// Override the log directory from the config file.
  #[arg(long, value_name = "DIR")]
  log_dir: Option<PathBuf>,

  /// Do not write the raw user and department responses.
  #[arg(long)]
  no_dump: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  // CLI flags override the config file.
  if let Some(dir) = &cli.output {
    settings.output_path = expand_tilde(dir);
  }
  if let Some(dir) = &cli.log_dir {
    settings.log_path = expand_tilde(dir);
  }

  let stamp = run_stamp(&Local::now());
  let log_file = logging::init(&settings.log_path, &settings.log_level, &stamp)?;
  info!(log_file = %log_file.display(), "Loaded configuration:\n{}", settings.redacted());

  let client = DirectoryClient::new(settings.directory_config())?;
  let out = OutputDir::create(&settings.output_path, stamp)
    .context("preparing output directory")?;

  let summary =
    app::run(&client, &out, settings.root_department(), !cli.no_dump).await?;

  info!(
    departments = summary.departments,
    users = summary.users,
    warnings = summary.warnings,
    org_json = %summary.org_json.display(),
    csv = %summary.csv.display(),
    "Done"
  );
  Ok(())
}
