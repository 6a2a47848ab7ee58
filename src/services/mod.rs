mod backup;
mod config_deployer;
mod embedded_ansible_tree;
mod identity_filesystem;
mod playbook_manifest;
mod playbook_runner;
mod version_http;

pub use backup::{SystemDefaultsBackup, VscodeExtensionsBackup};
pub use config_deployer::FilesystemConfigDeployer;
pub use embedded_ansible_tree::EmbeddedAnsibleTree;
pub use identity_filesystem::FilesystemIdentityStore;
pub use playbook_manifest::ManifestPlaybookIndex;
pub use playbook_runner::PlaybookCommandRunner;
pub use version_http::HttpVersionChecker;
