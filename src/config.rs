use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the EasyCal API server
    pub server_url: String,
    /// User whose consumptions and goals are tracked
    pub user_id: i64,
    /// Keep the burned-calories entry when navigating to another day
    /// instead of clearing it
    pub keep_burned_on_day_change: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3001".to_string(),
            user_id: 1,
            keep_burned_on_day_change: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(server_url) = std::env::var("EASYCAL_SERVER_URL") {
            config.server_url = server_url;
        }
        if let Ok(user_id) = std::env::var("EASYCAL_USER_ID") {
            if let Ok(parsed) = user_id.parse() {
                config.user_id = parsed;
            }
        }
        if let Ok(keep) = std::env::var("EASYCAL_KEEP_BURNED") {
            config.keep_burned_on_day_change = keep == "1" || keep.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/easycal/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("easycal")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    e
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:3001");
        assert_eq!(config.user_id, 1);
        assert!(!config.keep_burned_on_day_change);
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.user_id, 1);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "server_url: https://easycal.example.com").unwrap();
        writeln!(file, "user_id: 7").unwrap();
        writeln!(file, "keep_burned_on_day_change: true").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.server_url, "https://easycal.example.com");
        assert_eq!(config.user_id, 7);
        assert!(config.keep_burned_on_day_change);
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "server_url: http://fromfile:3001").unwrap();

        // Set env var
        std::env::set_var("EASYCAL_SERVER_URL", "http://fromenv:3001");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.server_url, "http://fromenv:3001");

        // Clean up
        std::env::remove_var("EASYCAL_SERVER_URL");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
