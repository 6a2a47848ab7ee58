//! Role config deployment from the packaged tree to the user config root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::{DeployResult, RoleConfigDeployer};

/// Copies `roles/<role>/config/` subtrees into `<config-root>/roles/`.
pub struct FilesystemConfigDeployer {
    package_roles_dir: PathBuf,
    local_config_root: PathBuf,
}

impl FilesystemConfigDeployer {
    /// `ansible_dir` is the materialized package tree; `local_config_root`
    /// is the writable destination root (`<config-root>/roles/`).
    pub fn new(ansible_dir: &Path, local_config_root: PathBuf) -> Self {
        Self { package_roles_dir: ansible_dir.join("roles"), local_config_root }
    }

    fn copy_tree(source: &Path, dest: &Path) -> io::Result<()> {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(source)? {
            let entry = entry?;
            let target = dest.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                Self::copy_tree(&entry.path(), &target)?;
            } else {
                fs::copy(entry.path(), &target)?;
            }
        }
        Ok(())
    }
}

impl RoleConfigDeployer for FilesystemConfigDeployer {
    fn roles_with_config(&self) -> Vec<String> {
        let mut found = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.package_roles_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() && path.join("config").is_dir() {
                    found.push(entry.file_name().to_string_lossy().to_string());
                }
            }
        }
        found.sort();
        found
    }

    fn deploy_role(&self, role: &str, overwrite: bool) -> DeployResult {
        if !self.roles_with_config().iter().any(|name| name == role) {
            return DeployResult::failure(
                role,
                format!("Role '{}' does not have a config directory.", role),
            );
        }

        let source = self.package_config_path(role);
        let dest = self.local_config_path(role);

        if dest.exists() && !overwrite {
            return DeployResult::success(role, "Config already exists.".to_string(), dest);
        }

        let copied = (|| -> io::Result<()> {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            if dest.exists() {
                fs::remove_dir_all(&dest)?;
            }
            Self::copy_tree(&source, &dest)
        })();

        if let Err(err) = copied {
            // Avoid leaving a half-copied tree behind.
            let _ = fs::remove_dir_all(&dest);
            return DeployResult::failure(role, format!("Failed to deploy config: {}", err));
        }

        DeployResult::success(role, format!("Deployed config to {}", dest.display()), dest)
    }

    fn deploy_all(&self, overwrite: bool) -> Vec<DeployResult> {
        self.deploy_multiple(&self.roles_with_config(), overwrite)
    }

    fn deploy_multiple(&self, roles: &[String], overwrite: bool) -> Vec<DeployResult> {
        let mut results = Vec::with_capacity(roles.len());
        for role in roles {
            let result = self.deploy_role(role, overwrite);
            let failed = !result.success;
            results.push(result);
            if failed {
                break;
            }
        }
        results
    }

    fn is_deployed(&self, role: &str) -> bool {
        self.local_config_path(role).exists()
    }

    fn package_config_path(&self, role: &str) -> PathBuf {
        self.package_roles_dir.join(role).join("config")
    }

    fn local_config_path(&self, role: &str) -> PathBuf {
        self.local_config_root.join(role)
    }
}
