/// Execution of the external Ansible engine.
pub trait AnsibleRunner {
    /// Run the packaged playbook for a profile, streaming the child's
    /// combined output to stdout.
    ///
    /// Returns the child's exit code verbatim; 1 when `ansible-playbook` is
    /// missing from PATH, 130 when the wait is interrupted by the user.
    fn run_playbook(&self, profile: &str, tags: &[String], verbose: bool) -> i32;
}
