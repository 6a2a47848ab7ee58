//! Profile names, alias resolution and the closed profile sets.

use crate::domain::AppError;

pub const PROFILE_COMMON: &str = "common";
pub const PROFILE_MACBOOK: &str = "macbook";
pub const PROFILE_MAC_MINI: &str = "mac-mini";

/// Profiles accepted by `make` (any target, including common).
pub const VALID_PROFILES: &[&str] = &[PROFILE_COMMON, PROFILE_MACBOOK, PROFILE_MAC_MINI];

/// Profiles accepted by `create` and `introduce` (a concrete machine).
pub const MACHINE_PROFILES: &[&str] = &[PROFILE_MACBOOK, PROFILE_MAC_MINI];

/// Short aliases resolved to canonical profile names before any other use.
pub const PROFILE_ALIASES: &[(&str, &str)] =
    &[("cmn", PROFILE_COMMON), ("mbk", PROFILE_MACBOOK), ("mmn", PROFILE_MAC_MINI)];

pub const IDENTITY_PERSONAL: &str = "personal";
pub const IDENTITY_WORK: &str = "work";

/// Resolve a profile alias to its canonical name. Unknown input is returned
/// unchanged so callers can produce their own validation error.
pub fn resolve_alias(profile: &str) -> &str {
    PROFILE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == profile)
        .map_or(profile, |(_, canonical)| *canonical)
}

/// Resolve and validate a profile against one of the closed profile sets.
fn resolve_against<'a>(profile: &'a str, allowed: &[&'static str]) -> Result<&'a str, AppError> {
    let resolved = resolve_alias(profile);
    if allowed.contains(&resolved) {
        return Ok(resolved);
    }

    let mut valid: Vec<&str> = allowed.to_vec();
    valid.sort_unstable();
    let mut aliases: Vec<&str> = PROFILE_ALIASES
        .iter()
        .filter(|(_, canonical)| allowed.contains(canonical))
        .map(|(alias, _)| *alias)
        .collect();
    aliases.sort_unstable();

    Err(AppError::validation(format!(
        "Invalid profile '{}'. Valid profiles: {} (aliases: {})",
        profile,
        valid.join(", "),
        aliases.join(", ")
    )))
}

/// Resolve a profile for commands that accept any target, `common` included.
pub fn resolve_profile(profile: &str) -> Result<&str, AppError> {
    resolve_against(profile, VALID_PROFILES)
}

/// Resolve a profile for commands that require a concrete machine.
pub fn resolve_machine_profile(profile: &str) -> Result<&str, AppError> {
    resolve_against(profile, MACHINE_PROFILES)
}

/// Resolve an identity profile for `switch` (personal/p, work/w).
pub fn resolve_identity_profile(profile: &str) -> Result<&'static str, AppError> {
    match profile.to_lowercase().as_str() {
        "personal" | "p" => Ok(IDENTITY_PERSONAL),
        "work" | "w" => Ok(IDENTITY_WORK),
        _ => Err(AppError::validation(format!(
            "Invalid profile '{}'. Valid profiles: personal (p), work (w)",
            profile
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(resolve_alias("mbk"), "macbook");
        assert_eq!(resolve_alias("mmn"), "mac-mini");
        assert_eq!(resolve_alias("cmn"), "common");
    }

    #[test]
    fn resolution_is_idempotent() {
        for (alias, _) in PROFILE_ALIASES {
            let once = resolve_alias(alias);
            assert_eq!(resolve_alias(once), once);
        }
    }

    #[test]
    fn machine_profiles_reject_common() {
        assert!(resolve_machine_profile("common").is_err());
        assert!(resolve_machine_profile("cmn").is_err());
        assert_eq!(resolve_machine_profile("mbk").unwrap(), "macbook");
    }

    #[test]
    fn unknown_profile_is_a_validation_error() {
        let err = resolve_profile("linux").unwrap_err();
        assert!(err.to_string().contains("Invalid profile 'linux'"));
    }

    #[test]
    fn identity_profiles_accept_short_forms() {
        assert_eq!(resolve_identity_profile("p").unwrap(), "personal");
        assert_eq!(resolve_identity_profile("W").unwrap(), "work");
        assert!(resolve_identity_profile("team").is_err());
    }
}
