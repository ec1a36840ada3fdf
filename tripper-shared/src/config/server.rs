use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use super::ConfigError;
use crate::gate::GateConfig;

/// Log output format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Listener settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Location of the built SPA bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WebConfig {
    /// Directory served as static files.
    pub static_dir: PathBuf,
    /// Document served for client-side routes.
    pub spa_index: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("tripper-web/dist"),
            spa_index: PathBuf::from("tripper-web/dist/index.html"),
        }
    }
}

/// Logging settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// The main configuration structure for the Tripper server.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub web: WebConfig,
    pub gate: GateConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads the configuration from a file, environment variables, and the
    /// command line, in increasing order of precedence.
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a YAML, JSON, or TOML file.
    /// * `port_override` - Optional port from the command line.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, an
    /// environment override is malformed, or validation fails.
    pub fn load_config(
        config_path: Option<PathBuf>,
        port_override: Option<u16>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::with_defaults(),
        };

        config.apply_env_overrides()?;

        if let Some(port) = port_override {
            config.server.port = port;
        }

        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension {
            "yaml" | "yml" => {
                serde_yml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "json" => {
                serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "toml" => toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(port) = env::var("TRIPPER_SERVER_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "TRIPPER_SERVER_PORT",
                reason: "must be a valid number between 1 and 65535".to_string(),
            })?;
        }
        if let Ok(host) = env::var("TRIPPER_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(level) = env::var("TRIPPER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("TRIPPER_LOG_FORMAT") {
            self.logging.format = match format.to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: "TRIPPER_LOG_FORMAT",
                        reason: "must be 'text' or 'json'".to_string(),
                    });
                }
            };
        }
        if let Ok(dir) = env::var("TRIPPER_STATIC_DIR") {
            let dir = PathBuf::from(dir);
            self.web.spa_index = dir.join("index.html");
            self.web.static_dir = dir;
        }
        if let Ok(paths) = env::var("TRIPPER_PROTECTED_PATHS") {
            self.gate.protected_paths = paths
                .split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        Ok(())
    }

    /// Validate the resolved configuration.
    ///
    /// # Errors
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("Invalid server port. Must be greater than 0.".to_string());
        }
        if !self.gate.login_path.starts_with('/') {
            errors.push(format!(
                "Gate login path must start with '/': {}",
                self.gate.login_path
            ));
        }
        for path in &self.gate.protected_paths {
            if !path.starts_with('/') {
                errors.push(format!("Protected path must start with '/': {path}"));
            }
        }
        if self.gate.cookie_name.trim().is_empty() {
            errors.push("Gate cookie name must not be empty.".to_string());
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
    use serial_test::serial;
    use tempfile::TempDir;

    fn cleanup_env_vars() {
        unsafe {
            env::remove_var("TRIPPER_SERVER_PORT");
            env::remove_var("TRIPPER_SERVER_HOST");
            env::remove_var("TRIPPER_LOG_LEVEL");
            env::remove_var("TRIPPER_LOG_FORMAT");
            env::remove_var("TRIPPER_STATIC_DIR");
            env::remove_var("TRIPPER_PROTECTED_PATHS");
        }
    }

    #[test]
    #[serial]
    fn defaults_load_without_a_file() {
        cleanup_env_vars();
        let config = Config::load_config(None, None).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gate.login_path, "/auth/login");
        assert_eq!(config.gate.protected_paths, ["/dashboard", "/admin", "/member"]);
        assert_eq!(config.gate.cookie_name, "token");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn port_override_wins_over_environment() {
        cleanup_env_vars();
        unsafe {
            env::set_var("TRIPPER_SERVER_PORT", "5555");
        }
        let config = Config::load_config(None, Some(7777)).unwrap();
        assert_eq!(config.server.port, 7777);
        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn environment_overrides_apply() {
        cleanup_env_vars();
        unsafe {
            env::set_var("TRIPPER_SERVER_PORT", "9090");
            env::set_var("TRIPPER_LOG_LEVEL", "debug");
            env::set_var("TRIPPER_LOG_FORMAT", "JSON");
            env::set_var("TRIPPER_STATIC_DIR", "/srv/tripper");
            env::set_var("TRIPPER_PROTECTED_PATHS", "/vault, /member ,");
        }
        let config = Config::load_config(None, None).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.web.static_dir, PathBuf::from("/srv/tripper"));
        assert_eq!(config.web.spa_index, PathBuf::from("/srv/tripper/index.html"));
        assert_eq!(config.gate.protected_paths, ["/vault", "/member"]);
        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn invalid_port_in_environment_is_rejected() {
        cleanup_env_vars();
        unsafe {
            env::set_var("TRIPPER_SERVER_PORT", "invalid_port");
        }
        let err = Config::load_config(None, None).unwrap_err();
        assert!(err.to_string().contains("TRIPPER_SERVER_PORT"));
        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn zero_port_fails_validation() {
        cleanup_env_vars();
        let err = Config::load_config(None, Some(0)).unwrap_err();
        assert!(err.to_string().contains("Invalid server port"));
    }

    #[test]
    #[serial]
    fn yaml_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
        cleanup_env_vars();
        let temp_dir = TempDir::new()?;
        let config_file = temp_dir.path().join("tripper.yaml");
        fs::write(
            &config_file,
            r#"
server:
  port: 4000
gate:
  protected_paths: ["/dashboard"]
  login_path: "/signin"
logging:
  format: json
"#,
        )?;

        let config = Config::load_config(Some(config_file), None)?;
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gate.protected_paths, ["/dashboard"]);
        assert_eq!(config.gate.login_path, "/signin");
        assert_eq!(config.gate.cookie_name, "token");
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    }

    #[test]
    #[serial]
    fn toml_and_json_files_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
        cleanup_env_vars();
        let temp_dir = TempDir::new()?;

        let toml_file = temp_dir.path().join("tripper.toml");
        fs::write(&toml_file, "[server]\nport = 4100\n")?;
        assert_eq!(Config::load_config(Some(toml_file), None)?.server.port, 4100);

        let json_file = temp_dir.path().join("tripper.json");
        fs::write(&json_file, r#"{"server":{"port":4200}}"#)?;
        assert_eq!(Config::load_config(Some(json_file), None)?.server.port, 4200);
        Ok(())
    }

    #[test]
    #[serial]
    fn unsupported_extension_is_rejected() {
        cleanup_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tripper.ini");
        fs::write(&path, "port=1").unwrap();
        let err = Config::load_config(Some(path), None).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "ini"));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::with_defaults();
        config.server.port = 0;
        config.gate.login_path = "login".to_string();
        config.gate.protected_paths = vec!["admin".to_string()];
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
