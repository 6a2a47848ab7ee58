//! Phase definitions for the `introduce` setup guide.

use crate::domain::PROFILE_MACBOOK;

/// A setup phase with literal commands for the user to copy.
#[derive(Debug, Clone, Copy)]
pub struct IntroductionPhase {
    pub name: &'static str,
    pub description: &'static str,
    pub commands: &'static [&'static str],
    /// Phases that must be finished before this one makes sense.
    pub dependencies: &'static [&'static str],
}

/// The guided phases after the brew bootstrap, in presentation order.
pub const INTRODUCTION_PHASES: &[IntroductionPhase] = &[
    IntroductionPhase {
        name: "Configuration",
        description: "These can run in parallel - open multiple terminals if you want:",
        commands: &[
            "menv make shell",
            "menv make system",
            "menv make git",
            "menv make jj",
            "menv make gh",
        ],
        dependencies: &[],
    },
    IntroductionPhase {
        name: "Language Runtimes",
        description: "These can run in parallel:",
        commands: &[
            "menv make python-platform",
            "menv make nodejs-platform",
            "menv make ruby",
            "menv make rust-platform",
            "menv make go-platform",
        ],
        dependencies: &[],
    },
    IntroductionPhase {
        name: "Tools",
        description: "Run after the corresponding runtime is installed:",
        commands: &[
            "menv make python-tools  # requires: python-platform",
            "menv make uv            # requires: python-tools",
            "menv make nodejs-tools  # requires: nodejs-platform",
            "menv make rust-tools    # requires: rust-platform",
            "menv make go-tools      # requires: go-platform",
        ],
        dependencies: &["Language Runtimes"],
    },
    IntroductionPhase {
        name: "Editors",
        description: "Configuration and extensions (apps should be pre-installed):",
        commands: &["menv make vscode", "menv make cursor"],
        dependencies: &[],
    },
];

/// Optional commands worth running after the main setup.
pub fn optional_commands(profile: &str) -> Vec<String> {
    let profile_alias = if profile == PROFILE_MACBOOK { "mbk" } else { "mmn" };
    vec![
        "menv make brew-formulae  # Additional CLI tools".to_string(),
        format!("menv make brew-cask {}      # GUI applications (profile-specific)", profile_alias),
        "menv make ssh            # SSH configuration".to_string(),
        "menv make docker         # Docker setup".to_string(),
        "menv make aider          # Aider AI assistant".to_string(),
        "menv make llm            # LLM tools".to_string(),
    ]
}
