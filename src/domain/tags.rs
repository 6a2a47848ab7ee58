//! CLI-side tag tables: groups, the full-setup sequence and optional tasks.
//!
//! The universe of tags itself lives in the playbook manifest; these tables
//! only name entries that are expected to exist there, and `create` verifies
//! that before touching the system.

/// Shorthand groups expanded at invocation time by `make`.
pub const TAG_GROUPS: &[(&str, &[&str])] = &[
    ("rust", &["rust-platform", "rust-tools"]),
    ("python", &["python-platform", "python-tools"]),
    ("nodejs", &["nodejs-platform", "nodejs-tools"]),
    ("go", &["go-platform", "go-tools"]),
];

/// Expand a tag group to its member tags; a plain tag expands to itself.
pub fn expand_tag(tag: &str) -> Vec<String> {
    TAG_GROUPS
        .iter()
        .find(|(group, _)| *group == tag)
        .map_or_else(
            || vec![tag.to_string()],
            |(_, tags)| tags.iter().map(|t| (*t).to_string()).collect(),
        )
}

/// Ordered tag sequence run by `create`.
///
/// Brew dependencies must come first (installing formulae later would race
/// the per-tool brew calls for the package lock), then configuration, then
/// language platforms before the tools that depend on them.
pub const FULL_SETUP_TAGS: &[&str] = &[
    // Phase 0: brew dependencies
    "brew-formulae",
    "ollama",
    // Phase 1: configuration
    "shell",
    "system",
    "git",
    "jj",
    "gh",
    // Phase 2: language runtimes
    "python-platform",
    "nodejs-platform",
    "ruby",
    "rust-platform",
    "go-platform",
    // Phase 3: language tools
    "python-tools",
    "uv",
    "nodejs-tools",
    "rust-tools",
    "go-tools",
    // Phase 4: editors
    "vscode",
    "cursor",
    // Phase 5: additional tools
    "aider",
    "coder",
    "mlx",
    "xcode",
];

/// Tags that are allowed to appear under more than one role. Currently empty.
pub const SHARED_TAGS: &[&str] = &[];

/// A task deliberately left out of the full-setup sequence.
#[derive(Debug, Clone, Copy)]
pub struct OptionalTask {
    pub tag: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Tasks skipped by `create` for stability or speed; surfaced in its summary.
pub const OPTIONAL_TASKS: &[OptionalTask] = &[
    OptionalTask {
        tag: "brew-cask",
        name: "GUI Applications",
        description: "Install GUI apps via Homebrew Cask",
    },
    OptionalTask {
        tag: "ollama-models",
        name: "Ollama Models",
        description: "Download Ollama models (requires 'ollama serve' running)",
    },
    OptionalTask {
        tag: "mlx-models",
        name: "MLX Models",
        description: "Download MLX models via huggingface-cli",
    },
];
