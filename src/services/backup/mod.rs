//! Backup targets: macOS system defaults and VSCode extensions.

mod system;
mod vscode;

pub use system::SystemDefaultsBackup;
pub use vscode::VscodeExtensionsBackup;
