mod error;
mod identity;
mod phases;
pub mod paths;
mod profile;
mod tags;
mod version;

pub use error::AppError;
pub use identity::{IdentityConfig, IdentitySection};
pub use phases::{INTRODUCTION_PHASES, IntroductionPhase, optional_commands};
pub use profile::{
    IDENTITY_PERSONAL, IDENTITY_WORK, MACHINE_PROFILES, PROFILE_ALIASES, PROFILE_COMMON,
    PROFILE_MAC_MINI, PROFILE_MACBOOK, VALID_PROFILES, resolve_alias, resolve_identity_profile,
    resolve_machine_profile, resolve_profile,
};
pub use tags::{FULL_SETUP_TAGS, OPTIONAL_TASKS, OptionalTask, SHARED_TAGS, TAG_GROUPS, expand_tag};
pub use version::Version;
