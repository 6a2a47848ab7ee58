//! Playbook manifest parsing and the role/tag index.
//!
//! `playbook.yml` is the single source of truth for all tag and role
//! information; nothing here is hard-coded.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, SHARED_TAGS};
use crate::ports::PlaybookIndex;

#[derive(Debug, Deserialize)]
struct Play {
    #[serde(default)]
    roles: Vec<RoleEntry>,
}

/// A manifest role entry: either a bare role name or a `{role, tags}`
/// mapping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoleEntry {
    Bare(String),
    Tagged {
        role: String,
        #[serde(default)]
        tags: Vec<String>,
    },
}

#[derive(Debug)]
struct Index {
    /// Role to tags, in manifest order.
    role_tags: Vec<(String, Vec<String>)>,
    tag_role: BTreeMap<String, String>,
}

/// Role/tag index over `playbook.yml`. Parsed once, cached for the process.
pub struct ManifestPlaybookIndex {
    manifest_path: PathBuf,
    index: OnceCell<Index>,
}

impl ManifestPlaybookIndex {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path, index: OnceCell::new() }
    }

    fn index(&self) -> Result<&Index, AppError> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }
        let built = self.build()?;
        Ok(self.index.get_or_init(|| built))
    }

    fn build(&self) -> Result<Index, AppError> {
        let content = fs::read_to_string(&self.manifest_path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::validation(format!(
                    "Playbook manifest not found: {}",
                    self.manifest_path.display()
                ))
            } else {
                AppError::Io(err)
            }
        })?;

        let plays: Vec<Play> = serde_yaml::from_str(&content).map_err(|err| AppError::Parse {
            what: "playbook.yml".to_string(),
            details: err.to_string(),
        })?;

        let mut role_tags: Vec<(String, Vec<String>)> = Vec::new();
        let mut tag_role: BTreeMap<String, String> = BTreeMap::new();

        for play in plays {
            for entry in play.roles {
                let (role, tags) = match entry {
                    RoleEntry::Bare(role) => (role, Vec::new()),
                    RoleEntry::Tagged { role, tags } => (role, tags),
                };

                if role_tags.iter().any(|(existing, _)| *existing == role) {
                    return Err(AppError::validation(format!(
                        "Duplicate role '{}' in playbook.yml",
                        role
                    )));
                }

                for tag in &tags {
                    if let Some(owner) = tag_role.get(tag)
                        && owner != &role
                        && !SHARED_TAGS.contains(&tag.as_str())
                    {
                        return Err(AppError::validation(format!(
                            "Tag '{}' is declared by both '{}' and '{}' in playbook.yml",
                            tag, owner, role
                        )));
                    }
                    tag_role.insert(tag.clone(), role.clone());
                }

                role_tags.push((role, tags));
            }
        }

        Ok(Index { role_tags, tag_role })
    }
}

impl PlaybookIndex for ManifestPlaybookIndex {
    fn tags_for_role(&self, role: &str) -> Result<Vec<String>, AppError> {
        let index = self.index()?;
        Ok(index
            .role_tags
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, tags)| tags.clone())
            .unwrap_or_default())
    }

    fn role_for_tag(&self, tag: &str) -> Result<Option<String>, AppError> {
        Ok(self.index()?.tag_role.get(tag).cloned())
    }

    fn all_tags(&self) -> Result<Vec<String>, AppError> {
        // BTreeMap keys are already sorted and de-duplicated.
        Ok(self.index()?.tag_role.keys().cloned().collect())
    }

    fn validate(&self, tags: &[String]) -> Result<bool, AppError> {
        let index = self.index()?;
        Ok(tags.iter().all(|tag| index.tag_role.contains_key(tag)))
    }

    fn tags_map(&self) -> Result<Vec<(String, Vec<String>)>, AppError> {
        Ok(self.index()?.role_tags.clone())
    }
}
