use std::path::PathBuf;

use crate::domain::{AppError, paths};
use crate::ports::AnsiblePaths;
use crate::services::{
    EmbeddedAnsibleTree, FilesystemConfigDeployer, FilesystemIdentityStore, HttpVersionChecker,
    ManifestPlaybookIndex, PlaybookCommandRunner,
};

/// Production service graph for one CLI invocation.
///
/// Owns the materialized Ansible tree; dropping the context at process exit
/// releases its temporary directory.
pub struct AppContext {
    pub ansible: EmbeddedAnsibleTree,
    pub playbook: ManifestPlaybookIndex,
    pub deployer: FilesystemConfigDeployer,
    pub identities: FilesystemIdentityStore,
    pub runner: PlaybookCommandRunner,
    pub versions: HttpVersionChecker,
    pub config_root: PathBuf,
}

impl AppContext {
    pub fn bootstrap() -> Result<Self, AppError> {
        let ansible = EmbeddedAnsibleTree::materialize()?;
        let config_root = paths::user_config_root()?;
        let roles_root = config_root.join("roles");

        let playbook = ManifestPlaybookIndex::new(ansible.playbook_path());
        let deployer = FilesystemConfigDeployer::new(ansible.ansible_dir(), roles_root.clone());
        let identities = FilesystemIdentityStore::new(config_root.clone());
        let runner = PlaybookCommandRunner::new(&ansible, roles_root);
        let versions = HttpVersionChecker::new();

        Ok(Self { ansible, playbook, deployer, identities, runner, versions, config_root })
    }
}
