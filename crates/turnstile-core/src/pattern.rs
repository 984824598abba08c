//! Path-pattern matching for access rules.
//!
//! One wildcard convention: a pattern whose final segment is the literal
//! `?*` matches that segment plus any and all following segments, requiring
//! at least one. `clinics/?*` matches `clinics/42` and `clinics/42/history`
//! but not bare `clinics`. A pattern without the wildcard must equal the
//! requested path exactly. A table wanting the bare segment too states it
//! as a second exact rule.

use serde::{Deserialize, Serialize};

/// The trailing segment that marks a wildcard pattern.
pub const WILDCARD_SEGMENT: &str = "?*";

/// A resource path pattern from a capability table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPattern(String);

enum PatternKind<'a> {
    /// No wildcard: the requested path must equal the pattern.
    Exact(&'a str),
    /// Trailing `?*`: literal lead segments, then at least one more segment.
    Wildcard { prefix: &'a str },
}

impl PathPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn kind(&self) -> PatternKind<'_> {
        if self.0 == WILDCARD_SEGMENT {
            PatternKind::Wildcard { prefix: "" }
        } else if let Some(prefix) = self.0.strip_suffix("/?*") {
            PatternKind::Wildcard { prefix }
        } else {
            PatternKind::Exact(&self.0)
        }
    }

    /// Whether the requested path (`resource`, `/`-joined with the child
    /// resource when present) satisfies this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self.kind() {
            PatternKind::Exact(pattern) => path == pattern,
            PatternKind::Wildcard { prefix: "" } => !path.is_empty(),
            PatternKind::Wildcard { prefix } => match path.strip_prefix(prefix) {
                // The prefix must end at a segment boundary and at least
                // one non-empty segment must follow.
                Some(rest) => rest.starts_with('/') && rest.len() > 1,
                None => false,
            },
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
