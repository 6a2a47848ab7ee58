//! Create command: full workstation provisioning for a machine profile.

use std::collections::BTreeSet;

use crate::domain::{AppError, FULL_SETUP_TAGS, OPTIONAL_TASKS, resolve_machine_profile};
use crate::ports::{AnsibleRunner, PlaybookIndex, RoleConfigDeployer};

/// Run the full-setup sequence, stopping at the first failure.
pub fn execute(
    playbook: &impl PlaybookIndex,
    deployer: &impl RoleConfigDeployer,
    runner: &impl AnsibleRunner,
    profile: &str,
    overwrite: bool,
    verbose: bool,
) -> Result<i32, AppError> {
    let profile = resolve_machine_profile(profile)?;

    // The manifest is the single source of truth; catch drift between it
    // and the built-in sequence before touching the system.
    let known: BTreeSet<String> = playbook.all_tags()?.into_iter().collect();
    let invalid: Vec<&str> =
        FULL_SETUP_TAGS.iter().copied().filter(|tag| !known.contains(*tag)).collect();
    if !invalid.is_empty() {
        return Err(AppError::validation(format!("Invalid tags in setup: {}", invalid.join(", "))));
    }

    println!();
    println!("menv: Creating {} environment", profile);
    println!("This will run {} tasks.", FULL_SETUP_TAGS.len());
    println!();

    println!("Deploying configurations...");
    for result in deployer.deploy_all(overwrite) {
        if result.success {
            if overwrite || !result.message.contains("already exists") {
                println!("  Deployed config for {}", result.role);
            }
        } else {
            eprintln!("Error: Failed to deploy config for {}", result.role);
            eprintln!("  {}", result.message);
            return Ok(1);
        }
    }
    println!();

    for (index, tag) in FULL_SETUP_TAGS.iter().enumerate() {
        println!("[{}/{}] Running: {}", index + 1, FULL_SETUP_TAGS.len(), tag);

        let exit_code = runner.run_playbook(profile, &[(*tag).to_string()], verbose);
        if exit_code != 0 {
            eprintln!("  ✗ Failed with exit code {}", exit_code);
            eprintln!();
            eprintln!(
                "Setup failed at step {}/{}: tag '{}' exited with {}",
                index + 1,
                FULL_SETUP_TAGS.len(),
                tag,
                exit_code
            );
            eprintln!("Fix the issue and run the command again to continue.");
            return Ok(exit_code);
        }
        println!("  ✓ Completed");
    }

    println!();
    println!("✅ Environment created successfully! Profile: {}", profile);
    print_optional_tasks();
    Ok(0)
}

fn print_optional_tasks() {
    println!();
    println!("Optional steps skipped for stability/speed:");
    for task in OPTIONAL_TASKS {
        println!();
        println!("  ➤ {}", task.name);
        println!("    Description: {}", task.description);
        println!("    Command:     menv make {}", task.tag);
    }
}
