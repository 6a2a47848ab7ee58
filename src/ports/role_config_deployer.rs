use std::path::PathBuf;

/// Outcome of deploying one role's config tree.
#[derive(Debug, Clone)]
pub struct DeployResult {
    pub role: String,
    pub success: bool,
    pub message: String,
    pub path: Option<PathBuf>,
}

impl DeployResult {
    pub fn success(role: &str, message: String, path: PathBuf) -> Self {
        Self { role: role.to_string(), success: true, message, path: Some(path) }
    }

    pub fn failure(role: &str, message: String) -> Self {
        Self { role: role.to_string(), success: false, message, path: None }
    }
}

/// Staging of packaged role config trees into the writable config root.
///
/// Not safe for concurrent invocation on the same role; callers serialize.
pub trait RoleConfigDeployer {
    /// Roles carrying an embedded config subtree, sorted by name.
    fn roles_with_config(&self) -> Vec<String>;

    /// Deploy one role's config tree, honoring the overwrite flag.
    fn deploy_role(&self, role: &str, overwrite: bool) -> DeployResult;

    /// Deploy every role with a config subtree, stopping on the first
    /// failure; the failing entry is the last element of the result.
    fn deploy_all(&self, overwrite: bool) -> Vec<DeployResult>;

    /// Deploy the given roles in caller order, stopping on the first
    /// failure; the failing entry is the last element of the result.
    fn deploy_multiple(&self, roles: &[String], overwrite: bool) -> Vec<DeployResult>;

    /// True if the role's config tree exists at the destination.
    fn is_deployed(&self, role: &str) -> bool;

    /// `<ansible>/roles/<role>/config/`, the read-only source.
    fn package_config_path(&self, role: &str) -> PathBuf;

    /// `<config-root>/roles/<role>/`, the writable destination.
    fn local_config_path(&self, role: &str) -> PathBuf;
}
