//! Backup macOS `defaults` values into automation-friendly YAML.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::BackupService;

/// Keys that must be read from the global domain with `defaults read -g`.
const SPECIAL_GLOBAL_KEYS: &[&str] = &[
    "com.apple.keyboard.fnState",
    "com.apple.trackpad.scaling",
    "com.apple.sound.beep.feedback",
    "com.apple.sound.beep.sound",
];
const DEFAULT_DOMAIN: &str = "NSGlobalDomain";

/// One entry of the declared key set, as read from the definitions YAML.
#[derive(Debug, Deserialize)]
struct SettingDefinition {
    key: String,
    #[serde(default = "default_domain")]
    domain: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    default: serde_yaml::Value,
    #[serde(default)]
    comment: Option<String>,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

/// Dumps the declared `defaults` key set to `system.yml`.
pub struct SystemDefaultsBackup;

impl BackupService for SystemDefaultsBackup {
    fn backup(
        &self,
        config_dir: &Path,
        definitions_dir: Option<&Path>,
        output: Option<&Path>,
    ) -> i32 {
        let definitions_dir =
            definitions_dir.map_or_else(|| config_dir.join("definitions"), Path::to_path_buf);
        let output_file = output.map_or_else(|| config_dir.join("system.yml"), Path::to_path_buf);

        match backup_settings(&definitions_dir, &output_file) {
            Ok(()) => {
                println!("Generated system defaults YAML: {}", output_file.display());
                0
            }
            Err(err) => {
                eprintln!("[ERROR] {}", err);
                1
            }
        }
    }
}

fn backup_settings(definitions_dir: &Path, output_file: &Path) -> Result<(), AppError> {
    if !definitions_dir.exists() {
        return Err(AppError::validation(format!(
            "Definitions directory not found: {}",
            definitions_dir.display()
        )));
    }

    let mut lines: Vec<String> = vec!["---".to_string()];
    for definition in load_definitions(definitions_dir)? {
        let raw_value = read_default(&definition);
        let formatted = format_value(&definition, &raw_value);
        lines.extend(build_entry(&definition, &formatted));
    }
    lines.push(String::new());

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_file, lines.join("\n"))?;
    Ok(())
}

fn load_definitions(definitions_dir: &Path) -> Result<Vec<SettingDefinition>, AppError> {
    let mut files: Vec<PathBuf> = fs::read_dir(definitions_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yml"))
        .collect();
    files.sort();

    let mut definitions = Vec::new();
    for file in files {
        let content = fs::read_to_string(&file)?;
        let parsed: Vec<SettingDefinition> =
            serde_yaml::from_str(&content).map_err(|err| AppError::Parse {
                what: file.display().to_string(),
                details: err.to_string(),
            })?;
        for definition in &parsed {
            if definition.key.is_empty() {
                return Err(AppError::validation(format!(
                    "Entry in {} is missing a valid 'key'.",
                    file.display()
                )));
            }
        }
        definitions.extend(parsed);
    }
    Ok(definitions)
}

/// Read the current value; fall back to the declared default when the key is
/// unset or `defaults` reports an error.
fn read_default(definition: &SettingDefinition) -> String {
    let output = if SPECIAL_GLOBAL_KEYS.contains(&definition.key.as_str()) {
        Command::new("defaults").args(["read", "-g", &definition.key]).output()
    } else {
        Command::new("defaults").args(["read", &definition.domain, &definition.key]).output()
    };

    match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => default_as_string(&definition.default),
    }
}

fn default_as_string(default: &serde_yaml::Value) -> String {
    match default {
        serde_yaml::Value::String(value) => value.clone(),
        serde_yaml::Value::Bool(value) => value.to_string(),
        serde_yaml::Value::Number(value) => value.to_string(),
        _ => String::new(),
    }
}

fn format_value(definition: &SettingDefinition, raw_value: &str) -> String {
    match definition.type_name.to_lowercase().as_str() {
        "bool" => format_bool(raw_value, &definition.default),
        "int" => format_numeric(raw_value, &definition.default, false),
        "float" => format_numeric(raw_value, &definition.default, true),
        "string" => format_string(raw_value, &definition.key, &definition.default),
        _ => quote(if raw_value.is_empty() {
            default_as_string(&definition.default)
        } else {
            raw_value.to_string()
        }),
    }
}

fn format_bool(raw_value: &str, default: &serde_yaml::Value) -> String {
    match raw_value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => "true".to_string(),
        "0" | "false" | "no" => "false".to_string(),
        other => match default {
            serde_yaml::Value::Bool(value) => value.to_string(),
            serde_yaml::Value::String(value) if !value.is_empty() => value.trim().to_lowercase(),
            _ if other.is_empty() => "false".to_string(),
            _ => other.to_string(),
        },
    }
}

fn format_numeric(raw_value: &str, default: &serde_yaml::Value, as_float: bool) -> String {
    let target = if raw_value.trim().is_empty() {
        default_as_string(default)
    } else {
        raw_value.trim().to_string()
    };
    match target.parse::<f64>() {
        Ok(value) if as_float => value.to_string(),
        Ok(value) => (value as i64).to_string(),
        Err(_) => target,
    }
}

fn format_string(raw_value: &str, key: &str, default: &serde_yaml::Value) -> String {
    let mut value = if raw_value.is_empty() {
        default_as_string(default)
    } else {
        raw_value.to_string()
    };
    // Screenshot locations come back expanded; keep the stored form portable.
    if key == "location"
        && let Ok(home) = env::var("HOME")
        && !home.is_empty()
        && value.starts_with(&home)
    {
        value = value.replacen(&home, "$HOME", 1);
    }
    quote(value)
}

fn quote(value: String) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn build_entry(definition: &SettingDefinition, value: &str) -> Vec<String> {
    let mut parts = vec![format!("key: \"{}\"", definition.key)];
    if definition.domain != DEFAULT_DOMAIN {
        parts.push(format!("domain: \"{}\"", definition.domain));
    }
    parts.push(format!("type: \"{}\"", definition.type_name));
    parts.push(format!("value: {}", value));

    let mut lines = Vec::new();
    if let Some(comment) = &definition.comment {
        lines.push(format!("# {}", comment));
    }
    lines.push(format!("- {{ {} }}", parts.join(", ")));
    lines
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_definitions(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn missing_definitions_directory_fails() {
        let dir = TempDir::new().unwrap();
        let code = SystemDefaultsBackup.backup(dir.path(), None, None);
        assert_eq!(code, 1);
    }

    #[test]
    fn declared_keys_are_dumped_with_defaults_when_unset() {
        let dir = TempDir::new().unwrap();
        let definitions = dir.path().join("definitions");
        write_definitions(
            &definitions,
            "keyboard.yml",
            r#"---
- key: "KeyRepeat"
  type: "int"
  default: 2
- key: "AppleShowScrollBars"
  type: "string"
  default: "Always"
  comment: "Scroll bar visibility"
"#,
        );

        // `defaults` is absent off macOS, so every key falls back to its
        // declared default; the output shape is what matters here.
        let code = SystemDefaultsBackup.backup(dir.path(), Some(&definitions), None);
        assert_eq!(code, 0);

        let output = fs::read_to_string(dir.path().join("system.yml")).unwrap();
        assert!(output.starts_with("---\n"));
        assert!(output.contains(r#"- { key: "KeyRepeat", type: "int", value: 2 }"#));
        assert!(output.contains("# Scroll bar visibility"));
        assert!(output.contains(r#"- { key: "AppleShowScrollBars", type: "string", value: "Always" }"#));
    }

    #[test]
    fn non_default_domains_are_recorded() {
        let dir = TempDir::new().unwrap();
        let definitions = dir.path().join("definitions");
        write_definitions(
            &definitions,
            "trackpad.yml",
            r#"---
- key: "Clicking"
  domain: "com.apple.driver.AppleBluetoothMultitouch.trackpad"
  type: "bool"
  default: true
"#,
        );

        let output_file = dir.path().join("out/system.yml");
        let code = SystemDefaultsBackup.backup(dir.path(), Some(&definitions), Some(&output_file));
        assert_eq!(code, 0);

        let output = fs::read_to_string(output_file).unwrap();
        assert!(output.contains(r#"domain: "com.apple.driver.AppleBluetoothMultitouch.trackpad""#));
        assert!(output.contains("value: true"));
    }

    #[test]
    fn malformed_definitions_fail() {
        let dir = TempDir::new().unwrap();
        let definitions = dir.path().join("definitions");
        write_definitions(&definitions, "broken.yml", "key: not-a-list\n");

        let code = SystemDefaultsBackup.backup(dir.path(), Some(&definitions), None);
        assert_eq!(code, 1);
        assert!(!dir.path().join("system.yml").exists());
    }

    #[test]
    fn bool_values_normalize() {
        let truthy = serde_yaml::Value::Bool(true);
        assert_eq!(format_bool("1", &truthy), "true");
        assert_eq!(format_bool("no", &truthy), "false");
        assert_eq!(format_bool("", &truthy), "true");
    }
}
