//! Switch command: point Git (and Jujutsu, when present) at one identity.

use std::io;
use std::process::Command;

use crate::domain::{AppError, resolve_identity_profile};
use crate::ports::IdentityStore;

pub fn execute(identities: &impl IdentityStore, profile: &str) -> Result<(), AppError> {
    if !identities.exists() {
        return Err(AppError::validation(
            "No configuration found. Run 'menv config create' first to configure identities.",
        ));
    }

    let profile = resolve_identity_profile(profile)?;

    let Some(identity) = identities.identity_for(profile)? else {
        return Err(AppError::validation(format!("Failed to load {} identity.", profile)));
    };
    if identity.name.trim().is_empty() || identity.email.trim().is_empty() {
        return Err(AppError::validation(format!(
            "The {} identity is not configured. Run 'menv config create' to configure.",
            profile
        )));
    }

    println!("Switching to {} identity...", profile);

    set_git_config("user.name", &identity.name)?;
    set_git_config("user.email", &identity.email)?;

    // Jujutsu is optional; a failure here downgrades to a warning because
    // Git remains the authoritative identity.
    if which::which("jj").is_ok() {
        let jj_ok = set_jj_config("user.name", &identity.name)
            && set_jj_config("user.email", &identity.email);
        if !jj_ok {
            eprintln!("Warning: Failed to set Jujutsu configuration.");
        }
    }

    let (name, email) = current_git_identity();
    println!();
    println!("Switched to {} identity", profile);
    println!("  Name:  {}", name);
    println!("  Email: {}", email);
    Ok(())
}

fn set_git_config(key: &str, value: &str) -> Result<(), AppError> {
    let output = Command::new("git").args(["config", "--global", key, value]).output();
    match output {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(AppError::ToolFailed {
            tool: format!("git config --global {}", key),
            code: output.status.code().unwrap_or(1),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(AppError::ToolMissing { tool: "git".to_string() })
        }
        Err(err) => Err(AppError::Io(err)),
    }
}

fn set_jj_config(key: &str, value: &str) -> bool {
    Command::new("jj")
        .args(["config", "set", "--user", key, value])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// The currently-effective Git identity; empty strings when unreadable.
fn current_git_identity() -> (String, String) {
    let read = |key: &str| {
        Command::new("git")
            .args(["config", "--global", key])
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_default()
    };
    (read("user.name"), read("user.email"))
}
