//! Introduce command: a guided, copy-paste setup walkthrough.
//!
//! Purely informational; the only side effect is terminal output.

use std::io::{self, BufRead, Write};

use crate::domain::{
    AppError, INTRODUCTION_PHASES, IntroductionPhase, optional_commands, resolve_machine_profile,
};

const RULE_WIDTH: usize = 50;

pub fn execute(profile: &str, no_wait: bool) -> Result<(), AppError> {
    let profile = resolve_machine_profile(profile)?;

    println!();
    println!("menv: macOS Environment Setup Guide");
    println!("Profile: {}", profile);
    println!();

    show_brew_phase(profile, no_wait)?;
    for (index, phase) in INTRODUCTION_PHASES.iter().enumerate() {
        show_phase(index + 1, phase, no_wait)?;
    }
    show_completion(profile);
    Ok(())
}

fn show_brew_phase(profile: &str, no_wait: bool) -> Result<(), AppError> {
    println!("Phase 0: Brew Dependencies");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
    println!("Install all required brew formulae first (prevents lock conflicts):");
    println!();
    println!("  menv make brew-formulae {}", profile);
    println!();
    if !no_wait {
        pause()?;
    }
    println!();
    Ok(())
}

fn show_phase(number: usize, phase: &IntroductionPhase, no_wait: bool) -> Result<(), AppError> {
    let dep_note = if phase.dependencies.is_empty() {
        String::new()
    } else {
        format!(" (requires: {})", phase.dependencies.join(", "))
    };

    println!("Phase {}: {}{}", number, phase.name, dep_note);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
    println!("{}", phase.description);
    println!();
    for command in phase.commands {
        println!("  {}", command);
    }
    println!();
    if !no_wait {
        pause()?;
    }
    println!();
    Ok(())
}

fn show_completion(profile: &str) {
    println!("✅ Setup complete!");
    println!();
    println!("Optional steps:");
    for command in optional_commands(profile) {
        println!("  {}", command);
    }
}

fn pause() -> Result<(), AppError> {
    print!("Press [Enter] when done...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_common_and_unknown_profiles() {
        assert!(execute("common", true).is_err());
        assert!(execute("desktop", true).is_err());
    }
}
