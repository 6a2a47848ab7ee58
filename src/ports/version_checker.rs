use crate::domain::AppError;

/// Release feed queries and self-update for the installed package.
pub trait VersionChecker {
    /// The installed package version.
    fn current_version(&self) -> String;

    /// Latest release version from the upstream feed, leading `v` stripped.
    fn latest_version(&self) -> Result<String, AppError>;

    /// True iff `latest` is strictly newer than `current` under
    /// semantic-version precedence. Invalid versions are an error, never a
    /// silent false.
    fn needs_update(&self, current: &str, latest: &str) -> Result<bool, AppError>;

    /// Upgrade this package through pipx; returns the child's exit code.
    fn run_pipx_upgrade(&self) -> Result<i32, AppError>;
}
