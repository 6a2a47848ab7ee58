//! Filesystem-backed identity store (`config.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, IdentityConfig, IdentitySection};
use crate::ports::IdentityStore;

pub struct FilesystemIdentityStore {
    config_path: PathBuf,
}

impl FilesystemIdentityStore {
    /// Store rooted at the given config directory (`<config-root>/`).
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_path: config_dir.join("config.toml") }
    }
}

impl IdentityStore for FilesystemIdentityStore {
    fn exists(&self) -> bool {
        self.config_path.exists()
    }

    fn load(&self) -> Result<Option<IdentityConfig>, AppError> {
        if !self.config_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.config_path)?;
        let config: IdentityConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(Some(config))
    }

    fn save(&self, config: &IdentityConfig) -> Result<(), AppError> {
        config.validate()?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        // One write of a fully rendered buffer, so a partially-written file
        // is never observed.
        fs::write(&self.config_path, config.to_toml_string())?;
        Ok(())
    }

    fn identity_for(&self, profile: &str) -> Result<Option<IdentitySection>, AppError> {
        let Some(config) = self.load()? else {
            return Ok(None);
        };
        Ok(config.section(profile).cloned())
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}
