use std::path::Path;

/// A backup target: dumps some machine state under the config root.
pub trait BackupService {
    /// Run the backup; diagnostics go to stderr, the summary to stdout.
    ///
    /// `definitions_dir` and `output` override the target's defaults, which
    /// are derived from `config_dir`. Returns a process exit code.
    fn backup(
        &self,
        config_dir: &Path,
        definitions_dir: Option<&Path>,
        output: Option<&Path>,
    ) -> i32;
}
