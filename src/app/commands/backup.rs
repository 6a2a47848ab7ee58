//! Backup command: dispatch to the backup target services.

use std::path::Path;

use crate::domain::AppError;
use crate::ports::{AnsiblePaths, BackupService};
use crate::services::{SystemDefaultsBackup, VscodeExtensionsBackup};

const TARGETS: &[(&str, &str)] = &[
    ("system", "Backup macOS system defaults"),
    ("vscode", "Backup VSCode extensions list"),
];

pub fn execute(
    paths: &impl AnsiblePaths,
    config_root: &Path,
    target: &str,
) -> Result<i32, AppError> {
    match target {
        "list" | "ls" => {
            print_targets();
            Ok(0)
        }
        "system" => {
            // The declared key set ships inside the system role's config
            // tree; the dump itself lands under the writable config root.
            let definitions =
                paths.ansible_dir().join("roles/system/config/common/definitions");
            run_target("Backup macOS system defaults", || {
                SystemDefaultsBackup.backup(config_root, Some(&definitions), None)
            })
        }
        "vscode" | "vscode-extensions" => run_target("Backup VSCode extensions list", || {
            VscodeExtensionsBackup.backup(config_root, None, None)
        }),
        other => Err(AppError::validation(format!(
            "Unknown backup target '{}'. Valid targets: {}",
            other,
            TARGETS.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ")
        ))),
    }
}

fn run_target(description: &str, backup: impl FnOnce() -> i32) -> Result<i32, AppError> {
    println!("Running backup: {}", description);
    println!();

    let exit_code = backup();
    if exit_code == 0 {
        println!();
        println!("✅ Backup completed successfully!");
    } else {
        eprintln!();
        eprintln!("✗ Backup failed with exit code {}", exit_code);
    }
    Ok(exit_code)
}

fn print_targets() {
    println!("Available backup targets:");
    println!();
    for (name, description) in TARGETS {
        println!("  {} - {}", name, description);
    }
    println!();
    println!("Usage: menv backup <target>");
}
