//! List command: available tags, tag groups and profiles.

use crate::domain::{AppError, PROFILE_ALIASES, PROFILE_COMMON, TAG_GROUPS, VALID_PROFILES};
use crate::ports::PlaybookIndex;

pub fn execute(playbook: &impl PlaybookIndex) -> Result<(), AppError> {
    let mut tags_map = playbook.tags_map()?;
    tags_map.sort_by(|left, right| left.0.cmp(&right.0));

    let width =
        tags_map.iter().map(|(role, _)| role.len()).max().unwrap_or(0);

    println!("Available tags:");
    for (role, tags) in &tags_map {
        // Bare roles carry no tags and are unreachable from `make`.
        if tags.is_empty() {
            continue;
        }
        println!("  {:<width$}  {}", role, tags.join(", "));
    }

    println!();
    println!("Tag groups (expanded automatically):");
    for (group, tags) in TAG_GROUPS {
        println!("  {} -> {}", group, tags.join(", "));
    }

    println!();
    println!("Profiles: {}", profile_summary());
    Ok(())
}

/// `common` first (it is the default), then the rest alphabetically, each
/// with its aliases.
fn profile_summary() -> String {
    let mut ordered: Vec<&str> = vec![PROFILE_COMMON];
    let mut rest: Vec<&str> =
        VALID_PROFILES.iter().copied().filter(|profile| *profile != PROFILE_COMMON).collect();
    rest.sort_unstable();
    ordered.extend(rest);

    ordered
        .iter()
        .map(|profile| {
            let aliases: Vec<&str> = PROFILE_ALIASES
                .iter()
                .filter(|(_, canonical)| canonical == profile)
                .map(|(alias, _)| *alias)
                .collect();
            let alias_part =
                if aliases.is_empty() { String::new() } else { format!(" ({})", aliases.join(", ")) };
            let default_part = if *profile == PROFILE_COMMON { " (default)" } else { "" };
            format!("{}{}{}", profile, alias_part, default_part)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
