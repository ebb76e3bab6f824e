//! Configuration management
//!
//! Settings live in `~/.go-launcher/config.yaml`. Every key is optional and
//! environment variables take precedence over the file:
//!
//! - `GO_LAUNCHER_STORE` overrides `store_path`
//! - `GO_LAUNCHER_SHELL` overrides `shell`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::launcher::{default_shell, Launcher};

/// Name of the store file inside the config directory.
pub const STORE_FILE_NAME: &str = "GoCommands.dat";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Location of the identifier store file.
    pub store_path: Option<PathBuf>,

    /// Command interpreter used when a command cannot be started directly.
    pub shell: Option<String>,

    /// Flag that makes `shell` run an inline command (`/C`, `-c`).
    pub shell_flag: Option<String>,

    /// Wait for launched commands to exit before returning.
    pub wait: bool,
}

impl Config {
    /// Loads the config file, falling back to defaults when it is absent
    /// or there is no home directory, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parses a config file without applying environment overrides.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .context("Could not find home directory")?
            .join(".go-launcher"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    fn apply_env(&mut self) {
        if let Some(store) = env::var_os("GO_LAUNCHER_STORE").filter(|v| !v.is_empty()) {
            self.store_path = Some(PathBuf::from(store));
        }
        if let Some(shell) = env::var("GO_LAUNCHER_SHELL").ok().filter(|v| !v.is_empty()) {
            self.shell = Some(shell);
        }
    }

    /// Resolves the store path: `override_path` > configured path > default.
    ///
    /// The default lives in the config directory, which is created if needed.
    pub fn resolve_store_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path.or_else(|| self.store_path.clone()) {
            return Ok(path);
        }

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir.join(STORE_FILE_NAME))
    }

    /// Builds the launcher, forcing `wait` on when `wait` is set.
    pub fn launcher(&self, wait: bool) -> Launcher {
        let (default_program, default_flag) = default_shell();
        Launcher::new(
            self.shell.clone().unwrap_or(default_program),
            self.shell_flag.clone().unwrap_or(default_flag),
            wait || self.wait,
        )
    }
}
