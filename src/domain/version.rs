use std::cmp::Ordering;

/// A dotted-numeric version with semantic-version precedence.
///
/// A leading `v` is tolerated (release tags carry one); missing segments
/// compare as zero, so `1.2` equals `1.2.0`.
#[derive(Debug, Clone)]
pub struct Version {
    parts: Vec<u32>,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Version {
    /// Parse a version string into a `Version`.
    ///
    /// Returns `None` if any segment is non-numeric.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().trim_start_matches('v');
        let parts: Result<Vec<u32>, _> = normalized.split('.').map(str::parse).collect();
        parts.ok().map(|parts| Self { parts })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.parts.len().max(other.parts.len());
        for idx in 0..max_len {
            let left = *self.parts.get(idx).unwrap_or(&0);
            let right = *other.parts.get(idx).unwrap_or(&0);
            match left.cmp(&right) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}
