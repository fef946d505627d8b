use anyhow::{Context, Result};
use atlas_client::COUNTRIES_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ATLAS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.atlas/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("ATLAS_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("atlas").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".atlas").join("config.toml"));
    }

    anyhow::bail!("Could not determine config path: no HOME directory or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: COUNTRIES_ENDPOINT.to_string(),
            timeout_secs: 30,
            color: true,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://countries.trevorblades.com/graphql");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.color);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            endpoint: "http://localhost:4000/graphql".to_string(),
            timeout_secs: 5,
            color: false,
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "timeout_secs = 3\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.timeout_secs, 3);
        assert_eq!(loaded.endpoint, Config::default().endpoint);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_names_the_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "timeout_secs = \"soon\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
        Ok(())
    }

    #[test]
    fn test_endpoint_override() {
        let config = Config::default().with_endpoint(Some("http://127.0.0.1:1/graphql".into()));
        assert_eq!(config.endpoint, "http://127.0.0.1:1/graphql");

        let config = Config::default().with_endpoint(None);
        assert_eq!(config.endpoint, COUNTRIES_ENDPOINT);
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/tmp/atlas.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/atlas.toml"));
        Ok(())
    }
}
