use std::path::Path;

use crate::domain::{AppError, IdentityConfig, IdentitySection};

/// Persistence for the VCS identity file (`config.toml`).
pub trait IdentityStore {
    /// True if the identity file exists.
    fn exists(&self) -> bool;

    /// Load the identity file; `None` if absent, an error if malformed.
    fn load(&self) -> Result<Option<IdentityConfig>, AppError>;

    /// Validate and persist the configuration in a single write.
    fn save(&self, config: &IdentityConfig) -> Result<(), AppError>;

    /// The section for an identity profile; `None` if the file is absent or
    /// the profile is neither `personal` nor `work`.
    fn identity_for(&self, profile: &str) -> Result<Option<IdentitySection>, AppError>;

    /// Path of the identity file.
    fn config_path(&self) -> &Path;
}
