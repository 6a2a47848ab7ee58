//! Shared testing utilities for menv CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// The writable config root under the emulated home.
    pub fn config_root(&self) -> PathBuf {
        self.home().join(".config/menv")
    }

    /// Build a command for invoking the compiled `menv` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("menv").expect("Failed to locate menv binary");
        cmd.env("HOME", self.home());
        cmd
    }

    /// Write a valid identity file directly into the config root.
    pub fn write_identity(&self, personal: (&str, &str), work: (&str, &str)) {
        let config_root = self.config_root();
        fs::create_dir_all(&config_root).expect("Failed to create config root");
        let content = format!(
            "[personal]\nname = \"{}\"\nemail = \"{}\"\n\n[work]\nname = \"{}\"\nemail = \"{}\"\n",
            personal.0, personal.1, work.0, work.1
        );
        fs::write(config_root.join("config.toml"), content).expect("Failed to write identity file");
    }

    /// Assert that a role's config tree has been deployed.
    pub fn assert_role_deployed(&self, role: &str) {
        let path = self.config_root().join("roles").join(role);
        assert!(path.is_dir(), "Role config should be deployed at {}", path.display());
    }
}

/// True if a binary resolves on the test machine's PATH.
#[allow(dead_code)]
pub fn binary_available(name: &str) -> bool {
    StdCommand::new(name)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
