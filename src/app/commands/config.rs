//! Config command: show or interactively (re)create the identity file.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, IdentityConfig, IdentitySection};
use crate::ports::IdentityStore;

pub fn execute(identities: &impl IdentityStore, action: &str, overlay: bool) -> Result<(), AppError> {
    match action {
        "show" => show(identities),
        "create" | "cr" => create(identities, overlay),
        // Kept from earlier releases; always overwrites.
        "set" => create(identities, true),
        other => Err(AppError::validation(format!(
            "Unknown action '{}'. Valid actions: show, create, set",
            other
        ))),
    }
}

fn show(identities: &impl IdentityStore) -> Result<(), AppError> {
    let Some(config) = identities.load()? else {
        return Err(AppError::validation(
            "No configuration found. Run 'menv config create' to configure.",
        ));
    };

    println!("Config file: {}", identities.config_path().display());
    println!();
    println!("  personal  {}  <{}>", config.personal.name, config.personal.email);
    println!("  work      {}  <{}>", config.work.name, config.work.email);
    Ok(())
}

fn create(identities: &impl IdentityStore, overwrite: bool) -> Result<(), AppError> {
    if identities.exists() && !overwrite {
        return Err(AppError::validation(format!(
            "Configuration already exists at {}. Pass --overlay to replace it.",
            identities.config_path().display()
        )));
    }

    // A malformed existing file only loses its defaults; re-creating is the
    // way out of that state.
    let existing = identities.load().ok().flatten();

    println!("Configure menv VCS identities");
    println!();

    println!("Personal identity:");
    let personal = prompt_section(existing.as_ref().map(|config| &config.personal))?;
    println!();

    println!("Work identity:");
    let work = prompt_section(existing.as_ref().map(|config| &config.work))?;

    let config = IdentityConfig { personal, work };
    identities.save(&config)?;

    println!();
    println!("✅ Configuration saved to {}", identities.config_path().display());
    Ok(())
}

fn prompt_section(existing: Option<&IdentitySection>) -> Result<IdentitySection, AppError> {
    let name = prompt("  Name", existing.map(|section| section.name.as_str()))?;
    let email = prompt("  Email", existing.map(|section| section.email.as_str()))?;
    Ok(IdentitySection { name, email })
}

fn prompt(label: &str, default: Option<&str>) -> Result<String, AppError> {
    let mut input = Input::<String>::new().with_prompt(label);
    if let Some(default) = default.filter(|value| !value.is_empty()) {
        input = input.default(default.to_string());
    }

    match input.interact_text() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::Interrupted)
        }
        Err(err) => Err(AppError::validation(format!("Failed to read input: {}", err))),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    use super::*;

    struct FakeStore {
        config: RefCell<Option<IdentityConfig>>,
        path: PathBuf,
    }

    impl FakeStore {
        fn empty() -> Self {
            Self { config: RefCell::new(None), path: PathBuf::from("config.toml") }
        }

        fn populated() -> Self {
            Self {
                config: RefCell::new(Some(IdentityConfig {
                    personal: IdentitySection {
                        name: "A".to_string(),
                        email: "a@b".to_string(),
                    },
                    work: IdentitySection { name: "C".to_string(), email: "c@d".to_string() },
                })),
                path: PathBuf::from("config.toml"),
            }
        }
    }

    impl IdentityStore for FakeStore {
        fn exists(&self) -> bool {
            self.config.borrow().is_some()
        }

        fn load(&self) -> Result<Option<IdentityConfig>, AppError> {
            Ok(self.config.borrow().clone())
        }

        fn save(&self, config: &IdentityConfig) -> Result<(), AppError> {
            *self.config.borrow_mut() = Some(config.clone());
            Ok(())
        }

        fn identity_for(&self, profile: &str) -> Result<Option<IdentitySection>, AppError> {
            Ok(self
                .config
                .borrow()
                .as_ref()
                .and_then(|config| config.section(profile))
                .cloned())
        }

        fn config_path(&self) -> &Path {
            &self.path
        }
    }

    #[test]
    fn show_fails_when_the_store_is_absent() {
        let err = execute(&FakeStore::empty(), "show", false).unwrap_err();
        assert!(err.to_string().contains("No configuration found"));
    }

    #[test]
    fn create_refuses_to_clobber_without_overlay() {
        let err = execute(&FakeStore::populated(), "create", false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert!(err.to_string().contains("--overlay"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = execute(&FakeStore::empty(), "delete", false).unwrap_err();
        assert!(err.to_string().contains("Unknown action 'delete'"));
    }

    #[test]
    fn show_prints_both_sections() {
        // Smoke test: a populated store renders without error.
        assert!(execute(&FakeStore::populated(), "show", false).is_ok());
    }
}
