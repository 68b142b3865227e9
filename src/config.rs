//! Runtime configuration
//!
//! Configuration is assembled once at startup from three layers, lowest
//! precedence first: built-in defaults, an optional YAML file, and the
//! process environment. The resulting [`Config`] is immutable and passed by
//! reference to every component.
//!
//! ```yaml
//! apiBase: https://api.datawrapper.de/v3
//! cdnBase: https://datawrapper.dwcdn.net
//! authorId: "508399,672102"
//! organizationId: ""
//! maxCharts: 500
//! publishedOnly: true
//! outputPath: src/lib/data/charts.json
//! ```

use crate::error::{Error, Result, TOKEN_ENV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "chartfeed.yaml";

/// Default remote API base
pub const DEFAULT_API_BASE: &str = "https://api.datawrapper.de/v3";

/// Default CDN serving published charts and their thumbnails
pub const DEFAULT_CDN_BASE: &str = "https://datawrapper.dwcdn.net";

/// Default destination of the generated dataset
pub const DEFAULT_OUTPUT_PATH: &str = "src/lib/data/charts.json";

/// Default cap on records fetched per author
pub const DEFAULT_MAX_CHARTS: usize = 500;

/// Largest page the charts endpoint serves
pub const MAX_PAGE_SIZE: usize = 100;

/// Environment variable overriding the CDN base
pub const CDN_BASE_ENV: &str = "CDN_BASE";

/// Environment variable holding comma-separated author ids
pub const AUTHOR_ID_ENV: &str = "AUTHOR_ID";

/// Environment variable holding the organization id
pub const ORGANIZATION_ID_ENV: &str = "ORGANIZATION_ID";

// ============================================================================
// Config File
// ============================================================================

/// Optional overrides read from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    /// Remote API base URL
    pub api_base: Option<String>,
    /// CDN base URL
    pub cdn_base: Option<String>,
    /// Comma-separated author ids
    pub author_id: Option<String>,
    /// Organization (team) id
    pub organization_id: Option<String>,
    /// Record cap per author
    pub max_charts: Option<usize>,
    /// Restrict the listing to published charts
    pub published_only: Option<bool>,
    /// Where the dataset is written
    pub output_path: Option<PathBuf>,
    /// Records requested per page
    pub page_size: Option<usize>,
    /// Pause between page requests, in milliseconds
    pub page_delay_ms: Option<u64>,
    /// Per-request timeout, in seconds
    pub request_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Parse a config file from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }
}

// ============================================================================
// Config
// ============================================================================

/// Immutable configuration for a single run
#[derive(Clone)]
pub struct Config {
    /// Remote API base URL
    pub api_base: String,
    /// CDN base URL used for fallback chart and thumbnail URLs
    pub cdn_base: String,
    /// Bearer token for the remote API
    pub token: String,
    /// Statically configured author ids (comma-separated, may be empty)
    pub author_id: String,
    /// Statically configured organization id (may be empty)
    pub organization_id: String,
    /// Record cap per author
    pub max_charts: usize,
    /// Restrict the listing to published charts
    pub published_only: bool,
    /// Where the dataset is written
    pub output_path: PathBuf,
    /// Records requested per page
    pub page_size: usize,
    /// Pause between page requests
    pub page_delay: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Create a config with defaults for everything but the API base and token
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            token: token.into(),
            author_id: String::new(),
            organization_id: String::new(),
            max_charts: DEFAULT_MAX_CHARTS,
            published_only: true,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            page_size: MAX_PAGE_SIZE,
            page_delay: Duration::from_millis(100),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Load config from an explicit file (or `chartfeed.yaml` if present)
    /// and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => ConfigFile::from_path(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                ConfigFile::from_path(DEFAULT_CONFIG_FILE)?
            }
            None => ConfigFile::default(),
        };
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Build config from a parsed file and an environment lookup
    pub fn from_sources(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env_value = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let token = env_value(TOKEN_ENV).ok_or_else(|| Error::missing_field(TOKEN_ENV))?;

        let mut config = Self::new(
            file.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            token,
        );

        if let Some(cdn_base) = env_value(CDN_BASE_ENV).or(file.cdn_base) {
            config.cdn_base = cdn_base;
        }
        if let Some(author_id) = env_value(AUTHOR_ID_ENV).or(file.author_id) {
            config.author_id = author_id;
        }
        if let Some(organization_id) = env_value(ORGANIZATION_ID_ENV).or(file.organization_id) {
            config.organization_id = organization_id;
        }
        if let Some(max_charts) = file.max_charts {
            config.max_charts = max_charts;
        }
        if let Some(published_only) = file.published_only {
            config.published_only = published_only;
        }
        if let Some(output_path) = file.output_path {
            config.output_path = output_path;
        }
        if let Some(page_size) = file.page_size {
            config.page_size = page_size;
        }
        if let Some(ms) = file.page_delay_ms {
            config.page_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = file.request_timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        debug!(api_base = %config.api_base, cdn_base = %config.cdn_base, "Loaded config");
        Ok(config)
    }

    /// Replace the output path
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Check value ranges and URL syntax
    pub fn validate(&self) -> Result<()> {
        if self.max_charts == 0 {
            return Err(Error::invalid_value("maxCharts", "must be greater than 0"));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "pageSize",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        url::Url::parse(&self.api_base)
            .map_err(|e| Error::invalid_value("apiBase", e.to_string()))?;
        url::Url::parse(&self.cdn_base)
            .map_err(|e| Error::invalid_value("cdnBase", e.to_string()))?;
        Ok(())
    }

    /// True when an author or organization filter is configured
    pub fn has_static_filter(&self) -> bool {
        !self.author_id.trim().is_empty() || !self.organization_id.trim().is_empty()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("cdn_base", &self.cdn_base)
            .field("token", &"<redacted>")
            .field("author_id", &self.author_id)
            .field("organization_id", &self.organization_id)
            .field("max_charts", &self.max_charts)
            .field("published_only", &self.published_only)
            .field("output_path", &self.output_path)
            .field("page_size", &self.page_size)
            .field("page_delay", &self.page_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token() {
        let err = Config::from_sources(ConfigFile::default(), env_from(&[])).unwrap_err();
        assert!(err.is_missing_credential());

        let err = Config::from_sources(ConfigFile::default(), env_from(&[(TOKEN_ENV, "  ")]))
            .unwrap_err();
        assert!(err.is_missing_credential());
    }

    #[test]
    fn test_defaults() {
        let config =
            Config::from_sources(ConfigFile::default(), env_from(&[(TOKEN_ENV, "tok")])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.cdn_base, DEFAULT_CDN_BASE);
        assert_eq!(config.token, "tok");
        assert_eq!(config.max_charts, 500);
        assert!(config.published_only);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.page_delay, Duration::from_millis(100));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!config.has_static_filter());
    }

    #[test]
    fn test_file_and_env_layering() {
        let file = ConfigFile::from_yaml_str(
            r"
cdnBase: https://cdn.example.com
authorId: '1,2'
organizationId: file-team
maxCharts: 50
publishedOnly: false
outputPath: out/charts.json
",
        )
        .unwrap();

        let config = Config::from_sources(
            file,
            env_from(&[(TOKEN_ENV, "tok"), (ORGANIZATION_ID_ENV, "env-team")]),
        )
        .unwrap();

        assert_eq!(config.cdn_base, "https://cdn.example.com");
        assert_eq!(config.author_id, "1,2");
        assert_eq!(config.organization_id, "env-team");
        assert_eq!(config.max_charts, 50);
        assert!(!config.published_only);
        assert_eq!(config.output_path, PathBuf::from("out/charts.json"));
        assert!(config.has_static_filter());
    }

    #[test]
    fn test_validation() {
        let file = ConfigFile {
            max_charts: Some(0),
            ..ConfigFile::default()
        };
        let err = Config::from_sources(file, env_from(&[(TOKEN_ENV, "tok")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "maxCharts"));

        let file = ConfigFile {
            page_size: Some(250),
            ..ConfigFile::default()
        };
        let err = Config::from_sources(file, env_from(&[(TOKEN_ENV, "tok")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "pageSize"));

        let file = ConfigFile {
            api_base: Some("not a url".to_string()),
            ..ConfigFile::default()
        };
        let err = Config::from_sources(file, env_from(&[(TOKEN_ENV, "tok")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "apiBase"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new(DEFAULT_API_BASE, "super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chartfeed.yaml");
        std::fs::write(&path, "maxCharts: 7\n").unwrap();

        let file = ConfigFile::from_path(&path).unwrap();
        assert_eq!(file.max_charts, Some(7));

        let err = ConfigFile::from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
