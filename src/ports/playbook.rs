use crate::domain::AppError;

/// Role/tag lookup over the playbook manifest.
///
/// The manifest is the single source of truth for the universe of tags; the
/// CLI never hard-codes it.
pub trait PlaybookIndex {
    /// Tags for a role in manifest order; empty if the role appears bare or
    /// is unknown.
    fn tags_for_role(&self, role: &str) -> Result<Vec<String>, AppError>;

    /// The role owning a tag, if any.
    fn role_for_tag(&self, tag: &str) -> Result<Option<String>, AppError>;

    /// All tags, sorted and de-duplicated.
    fn all_tags(&self) -> Result<Vec<String>, AppError>;

    /// True iff every given tag is known to the manifest.
    fn validate(&self, tags: &[String]) -> Result<bool, AppError>;

    /// Role to tag-list pairs in manifest order.
    fn tags_map(&self) -> Result<Vec<(String, Vec<String>)>, AppError>;
}
