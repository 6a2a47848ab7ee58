//! Release feed client and the pipx upgrade wrapper.

use std::io;
use std::process::Command;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, Version};
use crate::ports::VersionChecker;

const RELEASE_FEED_URL: &str = "https://api.github.com/repos/akitorahayashi/menv/releases/latest";
const GITHUB_JSON: &str = "application/vnd.github.v3+json";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ReleaseFeed {
    #[serde(default)]
    tag_name: String,
}

/// Checks the GitHub release feed and upgrades through pipx.
pub struct HttpVersionChecker {
    feed_url: String,
}

impl HttpVersionChecker {
    pub fn new() -> Self {
        Self { feed_url: RELEASE_FEED_URL.to_string() }
    }

    /// Point the checker at a different feed endpoint.
    pub fn with_feed_url(feed_url: Url) -> Self {
        Self { feed_url: feed_url.into() }
    }
}

impl Default for HttpVersionChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionChecker for HttpVersionChecker {
    fn current_version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn latest_version(&self) -> Result<String, AppError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| AppError::Network(format!("Failed to create HTTP client: {}", err)))?;

        let response = client
            .get(&self.feed_url)
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, concat!("menv/", env!("CARGO_PKG_VERSION")))
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| AppError::Network(format!("Failed to fetch latest version: {}", err)))?;

        let feed: ReleaseFeed = response
            .json()
            .map_err(|err| AppError::Network(format!("Failed to parse release data: {}", err)))?;

        if feed.tag_name.is_empty() {
            return Err(AppError::Network("No tag name found in release data".to_string()));
        }

        Ok(feed.tag_name.trim_start_matches('v').to_string())
    }

    fn needs_update(&self, current: &str, latest: &str) -> Result<bool, AppError> {
        let invalid = || {
            AppError::validation(format!("Invalid version comparison: {} vs {}", current, latest))
        };
        let current = Version::parse(current).ok_or_else(invalid)?;
        let latest = Version::parse(latest).ok_or_else(invalid)?;
        Ok(latest > current)
    }

    fn run_pipx_upgrade(&self) -> Result<i32, AppError> {
        println!("Upgrading menv via pipx...");
        match Command::new("pipx").args(["upgrade", "menv"]).status() {
            Ok(status) => Ok(status.code().unwrap_or(1)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::ToolMissing { tool: "pipx".to_string() })
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }
}
