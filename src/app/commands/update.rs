//! Update command: self-update against the upstream release feed.

use crate::domain::AppError;
use crate::ports::VersionChecker;

pub fn execute(versions: &impl VersionChecker) -> Result<(), AppError> {
    let current = versions.current_version();
    println!("Current version: {}", current);

    println!("Checking for updates...");
    let latest = versions.latest_version()?;
    println!("Latest version:  {}", latest);

    if !versions.needs_update(&current, &latest)? {
        println!();
        println!("✅ You are already on the latest version!");
        return Ok(());
    }

    println!();
    println!("Update available: {} -> {}", current, latest);

    let exit_code = versions.run_pipx_upgrade()?;
    if exit_code != 0 {
        return Err(AppError::ToolFailed { tool: "pipx upgrade".to_string(), code: exit_code });
    }

    println!();
    // The running binary keeps its baked-in version, so report the release
    // that pipx just installed.
    println!("✅ Successfully updated to version {}!", latest);
    Ok(())
}
