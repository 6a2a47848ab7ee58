mod ansible_paths;
mod ansible_runner;
mod backup;
mod identity_store;
mod playbook;
mod role_config_deployer;
mod version_checker;

pub use ansible_paths::AnsiblePaths;
pub use ansible_runner::AnsibleRunner;
pub use backup::BackupService;
pub use identity_store::IdentityStore;
pub use playbook::PlaybookIndex;
pub use role_config_deployer::{DeployResult, RoleConfigDeployer};
pub use version_checker::VersionChecker;
