use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{BridgeError, BridgeResult};
use crate::structs::config::config::Config;
use crate::structs::host::rule_key::RuleKey;

const SAMPLE_CONFIG: &str = r#"# roslyn-bridge configuration

[server]
# Port the Roslyn analyzer server listens on (localhost only)
port = 60000
# Token shared with the analyzer server, sent as X-Auth-Token
token = "change-me"

[poller]
# Threads checking running analyses for cancellation
worker_threads = 2
# How often each running analysis is checked
poll_interval_ms = 100

[analysis]
csharp_enterprise = false
vb_enterprise = false
# Override the file suffixes picked up for each language
# csharp_suffixes = [".cs", ".cshtml", ".razor"]
# vb_suffixes = [".vb", ".vbhtml"]

# Settings forwarded to the analyzer (keys starting with sonar.cs or sonar.vbnet)
[analysis.properties]
# "sonar.cs.analyzer.projectOutPaths" = "obj"

[[rules]]
key = "csharpsquid:S1481"

[[rules]]
key = "csharpsquid:S107"
params = { max = "7" }

[[rules]]
key = "vbnet:S1481"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> BridgeResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| BridgeError::system_error("config lookup", "could not determine the home directory"))
    }

    /// An explicit path must exist; the default location falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> BridgeResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(BridgeError::ConfigurationFileError {
                    path: path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::default_config_path()?;
                if !default_path.exists() {
                    log::info!("📋 No config at {}, using defaults", default_path.display());
                    return Ok(Config::default());
                }
                default_path
            }
        };

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(|e| BridgeError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| BridgeError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config(path: Option<&Path>) -> BridgeResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if config_file_path.exists() {
            return Err(BridgeError::ConfigurationFileError {
                path: config_file_path.display().to_string(),
                reason: "a configuration file already exists".to_string(),
            });
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;

        println!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.token.trim().is_empty() {
            errors.push("Server token is empty; the analyzer server rejects unauthenticated requests".to_string());
        }

        if config.server.port == 0 {
            errors.push("Server port must be between 1 and 65535".to_string());
        }

        if config.poller.poll_interval_ms == 0 {
            errors.push("Poll interval must be greater than 0 ms".to_string());
        }

        if config.poller.worker_threads == 0 {
            errors.push("Poller needs at least one worker thread".to_string());
        }

        let mut keys = std::collections::HashSet::new();
        for rule in &config.rules {
            if rule.key.parse::<RuleKey>().is_err() {
                errors.push(format!("Rule key '{}' is not of the form repository:rule", rule.key));
            } else if !keys.insert(&rule.key) {
                errors.push(format!("Duplicate rule: {}", rule.key));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sample_config_is_valid_apart_from_the_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        ConfigManager::create_sample_config(Some(&path)).unwrap();
        let config = ConfigManager::load(Some(&path)).unwrap();

        assert_eq!(config.server.token, "change-me");
        assert_eq!(config.rules.len(), 3);
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn does_not_overwrite_existing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[server]\nport = 1\n").unwrap();

        assert!(ConfigManager::create_sample_config(Some(&path)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[server]\nport = 1\n");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();

        let result = ConfigManager::load(Some(&dir.path().join("missing.toml")));

        assert!(matches!(result, Err(BridgeError::ConfigurationFileError { .. })));
    }

    #[test]
    fn invalid_toml_is_reported_with_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[server\nport = ").unwrap();

        let error = ConfigManager::load(Some(&path)).unwrap_err();

        assert!(error.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config: Config = toml::from_str(
            "[server]\nport = 0\n[poller]\npoll_interval_ms = 0\n[[rules]]\nkey = \"S1\"\n[[rules]]\nkey = \"vbnet:S1\"\n[[rules]]\nkey = \"vbnet:S1\"\n",
        )
        .unwrap();
        config.poller.worker_threads = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 6);
        assert!(errors.iter().any(|e| e.contains("'S1'")));
        assert!(errors.iter().any(|e| e.contains("Duplicate rule: vbnet:S1")));
    }
}
