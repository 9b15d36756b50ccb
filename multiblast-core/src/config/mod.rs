//! Configuration types for the multiblast client

use crate::system::config_path;
use crate::MultiBlastError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the multi-blast service, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as the `Auth-Key` header when present
    #[serde(default)]
    pub auth_key: Option<String>,
    /// Project/site identifier recorded with every submitted job
    #[serde(default = "default_site")]
    pub site: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// 0 lets the service apply its own limit
    #[serde(default)]
    pub max_result_size: u64,
    #[serde(default = "default_target_type")]
    pub default_target_type: String,
}

// Default value functions
fn default_base_url() -> String { "http://localhost:8080".to_string() }
fn default_site() -> String { "PlasmoDB".to_string() }
fn default_request_timeout_secs() -> u64 { 300 }
fn default_connect_timeout_secs() -> u64 { 30 }
fn default_interval_ms() -> u64 { 3000 }
fn default_target_type() -> String { "Genome".to_string() }

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_key: None,
            site: default_site(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_result_size: 0,
            default_target_type: default_target_type(),
        }
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl ClientConfig {
    /// Apply `MULTIBLAST_*` environment variables on top of file values
    pub fn apply_env_overrides(&mut self) -> Result<(), MultiBlastError> {
        if let Ok(url) = std::env::var("MULTIBLAST_SERVICE_URL") {
            self.service.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(key) = std::env::var("MULTIBLAST_AUTH_KEY") {
            self.service.auth_key = Some(key);
        }
        if let Ok(site) = std::env::var("MULTIBLAST_SITE") {
            self.service.site = site;
        }
        if let Ok(interval) = std::env::var("MULTIBLAST_POLL_INTERVAL_MS") {
            self.polling.interval_ms = interval.parse().map_err(|_| {
                MultiBlastError::Configuration(format!(
                    "MULTIBLAST_POLL_INTERVAL_MS must be an integer, got '{}'",
                    interval
                ))
            })?;
        }
        Ok(())
    }
}

pub fn default_config() -> ClientConfig {
    ClientConfig::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, MultiBlastError> {
    let contents = std::fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&contents)
        .map_err(|e| MultiBlastError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &ClientConfig) -> Result<(), MultiBlastError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| MultiBlastError::Configuration(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load the config file if one exists, then apply environment overrides
pub fn load_or_default() -> Result<ClientConfig, MultiBlastError> {
    let path = config_path();
    let mut config = if path.exists() {
        tracing::debug!("Loading config from {}", path.display());
        load_config(&path)?
    } else {
        default_config()
    };
    config.apply_env_overrides()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();

        assert_eq!(config.service.base_url, "http://localhost:8080");
        assert_eq!(config.service.auth_key, None);
        assert_eq!(config.service.request_timeout_secs, 300);
        assert_eq!(config.service.connect_timeout_secs, 30);
        assert_eq!(config.polling.interval_ms, 3000);
        assert_eq!(config.polling.interval(), Duration::from_millis(3000));
        assert_eq!(config.submission.max_result_size, 0);
        assert_eq!(config.submission.default_target_type, "Genome");
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[service]
base_url = "https://blast.example.org/multi-blast"
auth_key = "secret"

[polling]
interval_ms = 500
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.service.base_url, "https://blast.example.org/multi-blast");
        assert_eq!(config.service.auth_key.as_deref(), Some("secret"));
        assert_eq!(config.service.site, "PlasmoDB");
        assert_eq!(config.polling.interval_ms, 500);
        assert_eq!(config.submission.default_target_type, "Genome");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[polling]\ninterval_ms = \"soon\"\n").unwrap();

        match load_config(&path) {
            Err(MultiBlastError::Configuration(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = ClientConfig::default();
        config.service.site = "ToxoDB".to_string();
        config.submission.max_result_size = 1000;
        save_config(&path, &config).unwrap();

        let reloaded = load_config(&path).unwrap();
        assert_eq!(reloaded.service.site, "ToxoDB");
        assert_eq!(reloaded.submission.max_result_size, 1000);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("MULTIBLAST_SERVICE_URL", "https://override.example.org/");
        std::env::set_var("MULTIBLAST_POLL_INTERVAL_MS", "1000");

        let mut config = ClientConfig::default();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.service.base_url, "https://override.example.org");
        assert_eq!(config.polling.interval_ms, 1000);

        std::env::set_var("MULTIBLAST_POLL_INTERVAL_MS", "often");
        assert!(config.apply_env_overrides().is_err());

        std::env::remove_var("MULTIBLAST_SERVICE_URL");
        std::env::remove_var("MULTIBLAST_POLL_INTERVAL_MS");
    }
}
