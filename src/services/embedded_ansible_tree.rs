//! The packaged Ansible tree, embedded in the binary and materialized on
//! disk so that `ansible-playbook` can read it like any other directory.

use std::path::Path;

use include_dir::{Dir, include_dir};
use tempfile::TempDir;

use crate::domain::AppError;
use crate::ports::AnsiblePaths;

static ANSIBLE_ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/ansible");

/// Materialized copy of the embedded Ansible tree.
///
/// The backing temporary directory lives as long as this value; the
/// application context holds one instance for the whole process, so the
/// directory is released at process exit.
#[derive(Debug)]
pub struct EmbeddedAnsibleTree {
    root: TempDir,
}

impl EmbeddedAnsibleTree {
    /// Extract the embedded tree into a fresh temporary directory.
    pub fn materialize() -> Result<Self, AppError> {
        let root = TempDir::with_prefix("menv-ansible-")?;
        ANSIBLE_ASSETS.extract(root.path())?;
        Ok(Self { root })
    }
}

impl AnsiblePaths for EmbeddedAnsibleTree {
    fn ansible_dir(&self) -> &Path {
        self.root.path()
    }
}
