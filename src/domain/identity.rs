//! VCS identity configuration: the `config.toml` model and validation.

use serde::Deserialize;

use crate::domain::{AppError, IDENTITY_PERSONAL, IDENTITY_WORK};

/// One identity section: the values handed to `git config --global`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentitySection {
    pub name: String,
    pub email: String,
}

/// The full identity file: exactly a personal and a work section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityConfig {
    pub personal: IdentitySection,
    pub work: IdentitySection,
}

impl IdentityConfig {
    /// Check that every field is non-empty after trimming.
    ///
    /// Presence and shape of the sections is already enforced by the
    /// deserializer; this covers the part TOML cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        for (section, identity) in
            [(IDENTITY_PERSONAL, &self.personal), (IDENTITY_WORK, &self.work)]
        {
            for (field, value) in [("name", &identity.name), ("email", &identity.email)] {
                if value.trim().is_empty() {
                    return Err(AppError::validation(format!(
                        "Field '{}.{}' cannot be empty.",
                        section, field
                    )));
                }
            }
        }
        Ok(())
    }

    /// Section lookup by identity profile; `None` for any other name.
    pub fn section(&self, profile: &str) -> Option<&IdentitySection> {
        match profile {
            IDENTITY_PERSONAL => Some(&self.personal),
            IDENTITY_WORK => Some(&self.work),
            _ => None,
        }
    }

    /// Render the `config.toml` textual form.
    ///
    /// Written by hand rather than through a serializer so the escape
    /// contract stays explicit: backslash and double quote are escaped,
    /// nothing else is touched.
    pub fn to_toml_string(&self) -> String {
        let mut lines = Vec::with_capacity(8);
        for (section, identity) in
            [(IDENTITY_PERSONAL, &self.personal), (IDENTITY_WORK, &self.work)]
        {
            lines.push(format!("[{}]", section));
            lines.push(format!("name = \"{}\"", escape(&identity.name)));
            lines.push(format!("email = \"{}\"", escape(&identity.email)));
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
