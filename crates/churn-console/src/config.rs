use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub(crate) const DEFAULT_BASE_URL: &str = "https://customer-intelligence-platform-1.onrender.com";

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) backend: BackendConfig,
    #[serde(default)]
    pub(crate) display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub(crate) base_url: String,
    #[serde(default = "default_predict_path")]
    pub(crate) predict_path: String,
    #[serde(default = "default_health_path")]
    pub(crate) health_path: String,
    /// humantime syntax, e.g. "30s". Unset leaves the HTTP stack defaults.
    #[serde(default)]
    pub(crate) timeout: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            predict_path: default_predict_path(),
            health_path: default_health_path(),
            timeout: None,
        }
    }
}

impl BackendConfig {
    pub(crate) fn timeout(&self) -> anyhow::Result<Option<Duration>> {
        match self.timeout.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => humantime::parse_duration(raw)
                .map(Some)
                .with_context(|| format!("invalid backend.timeout {raw:?}")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct DisplayConfig {
    #[serde(default)]
    pub(crate) probability: ProbabilityFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProbabilityFormat {
    /// `0.82` -> `82.0%`
    #[default]
    Percent,
    /// Number as received from the backend.
    Raw,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_predict_path() -> String {
    "/predict".to_string()
}

fn default_health_path() -> String {
    "/".to_string()
}

fn validate_config(config: &Config) -> anyhow::Result<()> {
    let base_url = config.backend.base_url.trim();
    if base_url.is_empty() {
        anyhow::bail!("backend.base_url must not be empty");
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        anyhow::bail!("backend.base_url must start with http:// or https://");
    }
    config.backend.timeout()?;
    Ok(())
}

pub(crate) fn load_config(path: Option<&Path>, base_url: Option<&str>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str::<Config>(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(base_url) = base_url {
        config.backend.base_url = base_url.to_string();
    }
    validate_config(&config)?;
    Ok(config)
}
