use anyhow::{Context, bail};
use serde::Deserialize;
use std::{error::Error, path::Path};
use url::Url;

use crate::yaml_include::render_yaml_with_includes;

pub const REMOTE_URL_ENV: &str = "FAKESCAN_REMOTE_URL";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScoringConfig {
    /// Substitute a random listing token for references without a `/dp/` segment
    /// instead of rejecting them.
    #[serde(default)]
    pub random_fallback_token: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub server_address: String,
    pub log_level: String,
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    #[serde(default)]
    pub analyzer: AnalyzerMode,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:5000".to_string(),
            log_level: "info".to_string(),
            allowed_origin: default_allowed_origin(),
            analyzer: AnalyzerMode::Local,
            remote_url: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl BackendConfig {
    /// Parsed remote base URL, required when `analyzer` is `remote`.
    pub fn remote_base_url(&self) -> anyhow::Result<Url> {
        let raw = self
            .remote_url
            .as_deref()
            .context("backend.remote_url is required when analyzer is remote")?;
        let mut url = Url::parse(raw).with_context(|| format!("Invalid remote_url {raw}"))?;
        // Url::join drops the last path segment unless it ends with a slash
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(url)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = render_yaml_with_includes(Path::new(config_path))?;
        let mut config = Self::from_yaml_str(&contents)?;

        if let Ok(remote_url) = std::env::var(REMOTE_URL_ENV) {
            tracing::info!(remote_url = %remote_url, "Remote URL overridden from environment");
            config.backend.remote_url = Some(remote_url);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        serde_yml::from_str(contents).context("Failed to deserialize config")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend.server_address.trim().is_empty() {
            bail!("backend.server_address must not be empty");
        }
        if self.backend.analyzer == AnalyzerMode::Remote {
            self.backend.remote_base_url()?;
        }
        Ok(())
    }
}
