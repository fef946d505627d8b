//! TestWorld pattern for declarative CLI test setup.
//!
//! Each world owns a temp directory with its own `config.toml`, so runs
//! never read the developer's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use atlas_testing::TestWorld;
///
/// let world = TestWorld::new().with_endpoint("http://127.0.0.1:9/graphql");
/// let mut cmd = assert_cmd::Command::new("atlas");
/// world.configure_command(&mut cmd).arg("countries");
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    config: Vec<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            config: Vec::new(),
            env_vars: HashMap::new(),
        }
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Point the config file at a GraphQL endpoint.
    pub fn with_endpoint(self, endpoint: &str) -> Self {
        self.with_config_line(format!("endpoint = {:?}", endpoint))
    }

    /// Append a raw TOML line to the config file.
    pub fn with_config_line(mut self, line: impl Into<String>) -> Self {
        self.config.push(line.into());
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write the config file (if any lines were given).
    pub fn write_config(&self) -> Result<()> {
        if !self.config.is_empty() {
            std::fs::write(&self.config_path, self.config.join("\n") + "\n")?;
        }
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. `Command::cargo_bin("atlas")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        self.write_config().expect("Failed to write config");

        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--no-color")
            .current_dir(self.temp_dir.path())
            .env_remove("ATLAS_CONFIG")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
