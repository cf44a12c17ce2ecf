//! Async HTTP client for the Bitrix24 directory webhooks.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use orgdir_core::{RawDepartment, RawUser};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

/// Endpoints and limits for the directory service.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
  pub users_url:       String,
  pub departments_url: String,
  pub timeout:         Duration,
}

/// A decoded response together with the document it came from.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
  pub raw:     serde_json::Value,
  pub records: Vec<T>,
}

/// The Bitrix24 REST response envelope.
#[derive(Deserialize)]
struct Envelope<T> {
  result:            Option<Vec<T>>,
  #[serde(default)]
  error:             Option<String>,
  #[serde(default)]
  error_description: Option<String>,
}

/// Reads users and departments from the directory service.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct DirectoryClient {
  client: Client,
  config: DirectoryConfig,
}

impl DirectoryClient {
  pub fn new(config: DirectoryConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  /// `GET <users_url>`
  pub async fn list_users(&self) -> Result<Fetched<RawUser>> {
    self.fetch(&self.config.users_url, "users").await
  }

  /// `GET <departments_url>`
  pub async fn list_departments(&self) -> Result<Fetched<RawDepartment>> {
    self.fetch(&self.config.departments_url, "departments").await
  }

  // Errors never carry the URL: webhook paths embed the access token.
  async fn fetch<T: DeserializeOwned>(
    &self,
    url: &str,
    what: &str,
  ) -> Result<Fetched<T>> {
    let resp = self
      .client
      .get(url)
      .send()
      .await
      .map_err(reqwest::Error::without_url)
      .with_context(|| format!("GET {what} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {what} → {}", resp.status()));
    }

    let raw: serde_json::Value = resp
      .json()
      .await
      .map_err(reqwest::Error::without_url)
      .with_context(|| format!("reading {what} response"))?;

    let envelope: Envelope<T> = serde_json::from_value(raw.clone())
      .with_context(|| format!("deserialising {what}"))?;

    let Some(records) = envelope.result else {
      return Err(anyhow!(
        "{what} response has no result: {} {}",
        envelope.error.unwrap_or_default(),
        envelope.error_description.unwrap_or_default()
      ));
    };

    Ok(Fetched { raw, records })
  }
}
