//! Backup the installed VSCode extensions to a JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::domain::AppError;
use crate::ports::BackupService;

const CANDIDATE_COMMANDS: &[&str] = &[
    "code",
    "/Applications/Visual Studio Code.app/Contents/Resources/app/bin/code",
    "code-insiders",
];

#[derive(Debug, Serialize)]
struct ExtensionsBackup {
    extensions: Vec<String>,
}

/// Writes `vscode-extensions.json` from `code --list-extensions`.
pub struct VscodeExtensionsBackup;

impl BackupService for VscodeExtensionsBackup {
    fn backup(
        &self,
        config_dir: &Path,
        _definitions_dir: Option<&Path>,
        output: Option<&Path>,
    ) -> i32 {
        let output_file =
            output.map_or_else(|| config_dir.join("vscode-extensions.json"), Path::to_path_buf);

        match run_backup(&output_file) {
            Ok(()) => {
                println!("VSCode extensions list backed up to: {}", output_file.display());
                0
            }
            Err(err) => {
                eprintln!("[ERROR] {}", err);
                1
            }
        }
    }
}

fn run_backup(output_file: &Path) -> Result<(), AppError> {
    let command = detect_command()?;
    let extensions = list_extensions(&command)?;

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let payload = ExtensionsBackup { extensions };
    let rendered = serde_json::to_string_pretty(&payload)
        .map_err(|err| AppError::validation(format!("Failed to render backup: {}", err)))?;
    fs::write(output_file, format!("{}\n", rendered))?;
    Ok(())
}

/// Find the VSCode binary: PATH first, then the app-bundle location.
fn detect_command() -> Result<PathBuf, AppError> {
    for candidate in CANDIDATE_COMMANDS {
        let path = Path::new(candidate);
        if path.is_absolute() {
            if path.exists() {
                return Ok(path.to_path_buf());
            }
        } else if let Ok(resolved) = which::which(candidate) {
            return Ok(resolved);
        }
    }
    Err(AppError::validation(
        "VSCode command (code or code-insiders) not found in PATH or default locations.",
    ))
}

fn list_extensions(command: &Path) -> Result<Vec<String>, AppError> {
    let output = Command::new(command).arg("--list-extensions").output().map_err(|_| {
        AppError::validation(format!("Command '{}' is not available on this system.", command.display()))
    })?;

    if !output.status.success() {
        return Err(AppError::validation(
            "Failed to get VSCode extensions. If VSCode is running, close it and try again.",
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
