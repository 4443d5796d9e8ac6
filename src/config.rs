use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for branchwright
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BranchwrightConfig {
    /// Issue-tracker API settings
    pub tracker: TrackerConfig,
    /// Repo-host API settings
    pub repo_host: RepoHostConfig,
    /// Default project/repo targets for workflows
    pub defaults: DefaultsConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Tracker API key (can be set via env var)
    pub api_key: Option<String>,
    /// Tracker GraphQL endpoint
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoHostConfig {
    /// Repo-host API token (can be set via env var)
    pub token: Option<String>,
    /// Organization that owns bare repository names
    pub org: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Default tracker project key
    pub project: String,
    /// Default repository name
    pub repo: String,
    /// HTTP request timeout in seconds
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level for the tracing subscriber
    pub log_level: String,
}

impl Default for BranchwrightConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig {
                api_key: None, // Read from env var when unset
                api_url: "https://api.linear.app/graphql".to_string(),
            },
            repo_host: RepoHostConfig {
                token: None, // Read from env var when unset
                org: "arclabs-studio".to_string(),
            },
            defaults: DefaultsConfig {
                project: "FAVRES".to_string(),
                repo: "FavRes".to_string(),
                request_timeout_seconds: 30,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl BranchwrightConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (branchwright.toml, .branchwright-rc)
    /// 3. Environment variables (prefixed with BRANCHWRIGHT_)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("branchwright.toml").exists() {
            builder = builder.add_source(File::with_name("branchwright"));
        }

        if Path::new(".branchwright-rc").exists() {
            builder = builder.add_source(File::with_name(".branchwright-rc"));
        }

        builder = builder.add_source(
            Environment::with_prefix("BRANCHWRIGHT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut loaded: BranchwrightConfig = config.try_deserialize()?;

        // Secrets fall back to well-known env vars when the config leaves
        // them unset.
        if loaded.tracker.api_key.is_none() {
            if let Ok(key) = std::env::var("TRACKER_API_KEY") {
                loaded.tracker.api_key = Some(key);
            }
        }
        if loaded.repo_host.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                loaded.repo_host.token = Some(token);
            } else if let Ok(token) = std::env::var("REPO_HOST_TOKEN") {
                loaded.repo_host.token = Some(token);
            }
        }

        Ok(loaded)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<BranchwrightConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = BranchwrightConfig::load_env_file();
        BranchwrightConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static BranchwrightConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = BranchwrightConfig::default();
        assert_eq!(config.defaults.project, "FAVRES");
        assert_eq!(config.defaults.request_timeout_seconds, 30);
        assert!(config.tracker.api_key.is_none());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = BranchwrightConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: BranchwrightConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.defaults.repo, config.defaults.repo);
        assert_eq!(parsed.tracker.api_url, config.tracker.api_url);
    }
}
