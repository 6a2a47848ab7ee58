//! Make command: run one tag (or tag group) against one profile.

use crate::domain::{AppError, PROFILE_COMMON, expand_tag, resolve_profile};
use crate::ports::{AnsibleRunner, PlaybookIndex, RoleConfigDeployer};

pub fn execute(
    playbook: &impl PlaybookIndex,
    deployer: &impl RoleConfigDeployer,
    runner: &impl AnsibleRunner,
    tag: &str,
    profile: &str,
    overlay: bool,
    verbose: bool,
) -> Result<i32, AppError> {
    let profile = resolve_profile(profile)?;
    let tags_to_run = expand_tag(tag);

    // Groups are CLI shortcuts; every expanded tag must exist.
    for candidate in &tags_to_run {
        if playbook.role_for_tag(candidate)?.is_none() {
            return Err(AppError::validation(format!(
                "Unknown tag '{}'. Use 'menv ls' to see available tags.",
                candidate
            )));
        }
    }

    if !stage_configs(playbook, deployer, &tags_to_run, overlay)? {
        return Ok(1);
    }

    println!("Running: {}", tag);
    if profile != PROFILE_COMMON {
        println!("Profile: {}", profile);
    }
    println!();

    let exit_code = runner.run_playbook(profile, &tags_to_run, verbose);
    if exit_code != 0 {
        eprintln!();
        eprintln!("✗ Failed with exit code {}", exit_code);
        return Ok(exit_code);
    }

    println!();
    println!("✅ Completed successfully!");
    Ok(0)
}

/// Stage configs for the roles behind the given tags. Returns false when a
/// deployment fails.
fn stage_configs(
    playbook: &impl PlaybookIndex,
    deployer: &impl RoleConfigDeployer,
    tags: &[String],
    overlay: bool,
) -> Result<bool, AppError> {
    let with_config = deployer.roles_with_config();
    let mut roles: Vec<String> = Vec::new();
    for tag in tags {
        if let Some(role) = playbook.role_for_tag(tag)?
            && with_config.contains(&role)
            && !roles.contains(&role)
        {
            roles.push(role);
        }
    }

    for role in &roles {
        if !overlay && deployer.is_deployed(role) {
            continue;
        }
        let result = deployer.deploy_role(role, overlay);
        if result.success {
            if overlay || !result.message.contains("already exists") {
                println!("Deployed config for {}", role);
            }
        } else {
            eprintln!("Error: Failed to deploy config for {}", role);
            eprintln!("  {}", result.message);
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::ports::DeployResult;

    use super::*;

    /// Two-role manifest: rust owns the rust pair, shell owns shell.
    struct TwoRolePlaybook;

    impl PlaybookIndex for TwoRolePlaybook {
        fn tags_for_role(&self, role: &str) -> Result<Vec<String>, AppError> {
            Ok(match role {
                "rust" => vec!["rust-platform".to_string(), "rust-tools".to_string()],
                "shell" => vec!["shell".to_string()],
                _ => Vec::new(),
            })
        }

        fn role_for_tag(&self, tag: &str) -> Result<Option<String>, AppError> {
            Ok(match tag {
                "rust-platform" | "rust-tools" => Some("rust".to_string()),
                "shell" => Some("shell".to_string()),
                _ => None,
            })
        }

        fn all_tags(&self) -> Result<Vec<String>, AppError> {
            Ok(vec![
                "rust-platform".to_string(),
                "rust-tools".to_string(),
                "shell".to_string(),
            ])
        }

        fn validate(&self, tags: &[String]) -> Result<bool, AppError> {
            let all = self.all_tags()?;
            Ok(tags.iter().all(|tag| all.contains(tag)))
        }

        fn tags_map(&self) -> Result<Vec<(String, Vec<String>)>, AppError> {
            Ok(vec![
                ("rust".to_string(), self.tags_for_role("rust")?),
                ("shell".to_string(), self.tags_for_role("shell")?),
            ])
        }
    }

    #[derive(Default)]
    struct RecordingDeployer {
        deployed: RefCell<Vec<(String, bool)>>,
    }

    impl RoleConfigDeployer for RecordingDeployer {
        fn roles_with_config(&self) -> Vec<String> {
            vec!["shell".to_string()]
        }

        fn deploy_role(&self, role: &str, overwrite: bool) -> DeployResult {
            self.deployed.borrow_mut().push((role.to_string(), overwrite));
            DeployResult::success(role, "Deployed".to_string(), PathBuf::from(role))
        }

        fn deploy_all(&self, overwrite: bool) -> Vec<DeployResult> {
            self.deploy_multiple(&self.roles_with_config(), overwrite)
        }

        fn deploy_multiple(&self, roles: &[String], overwrite: bool) -> Vec<DeployResult> {
            roles.iter().map(|role| self.deploy_role(role, overwrite)).collect()
        }

        fn is_deployed(&self, _role: &str) -> bool {
            false
        }

        fn package_config_path(&self, role: &str) -> PathBuf {
            PathBuf::from("pkg").join(role)
        }

        fn local_config_path(&self, role: &str) -> PathBuf {
            PathBuf::from("local").join(role)
        }
    }

    struct RecordingRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        code: i32,
    }

    impl RecordingRunner {
        fn succeeding() -> Self {
            Self { calls: RefCell::new(Vec::new()), code: 0 }
        }
    }

    impl AnsibleRunner for RecordingRunner {
        fn run_playbook(&self, profile: &str, tags: &[String], _verbose: bool) -> i32 {
            self.calls.borrow_mut().push((profile.to_string(), tags.to_vec()));
            self.code
        }
    }

    #[test]
    fn group_expands_to_one_invocation_with_all_tags() {
        let deployer = RecordingDeployer::default();
        let runner = RecordingRunner::succeeding();

        let code = execute(&TwoRolePlaybook, &deployer, &runner, "rust", "mmn", false, false)
            .unwrap();

        assert_eq!(code, 0);
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "mac-mini");
        assert_eq!(calls[0].1, vec!["rust-platform", "rust-tools"]);
    }

    #[test]
    fn unknown_tag_fails_before_any_invocation() {
        let deployer = RecordingDeployer::default();
        let runner = RecordingRunner::succeeding();

        let err = execute(&TwoRolePlaybook, &deployer, &runner, "unknown-tag", "common", false, false)
            .unwrap_err();

        assert!(err.to_string().contains("Unknown tag 'unknown-tag'"));
        assert!(runner.calls.borrow().is_empty());
        assert!(deployer.deployed.borrow().is_empty());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let deployer = RecordingDeployer::default();
        let runner = RecordingRunner::succeeding();

        let err = execute(&TwoRolePlaybook, &deployer, &runner, "shell", "windows", false, false)
            .unwrap_err();

        assert!(err.to_string().contains("Invalid profile"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn configs_for_owning_roles_stage_before_the_run() {
        let deployer = RecordingDeployer::default();
        let runner = RecordingRunner::succeeding();

        execute(&TwoRolePlaybook, &deployer, &runner, "shell", "common", false, false).unwrap();

        assert_eq!(*deployer.deployed.borrow(), vec![("shell".to_string(), false)]);
    }

    #[test]
    fn overlay_forces_a_fresh_deploy() {
        let deployer = RecordingDeployer::default();
        let runner = RecordingRunner::succeeding();

        execute(&TwoRolePlaybook, &deployer, &runner, "shell", "common", true, false).unwrap();

        assert_eq!(*deployer.deployed.borrow(), vec![("shell".to_string(), true)]);
    }

    #[test]
    fn runner_failure_propagates_verbatim() {
        let deployer = RecordingDeployer::default();
        let runner = RecordingRunner { calls: RefCell::new(Vec::new()), code: 4 };

        let code = execute(&TwoRolePlaybook, &deployer, &runner, "shell", "common", false, false)
            .unwrap();

        assert_eq!(code, 4);
    }
}
