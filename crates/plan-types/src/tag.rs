use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque version token assigned to a resource when it is created.
///
/// Used only for conditional-read comparison (`If-None-Match`). It is a
/// random UUID v4, not a content hash, and never changes while the resource
/// exists.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionTag(String);

impl VersionTag {
    /// Generate a fresh tag, unique with overwhelming probability.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing token string.
    pub fn from_string(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if an `If-None-Match` header value equals this tag.
    ///
    /// Comparison is exact. The only accepted variation is the tag wrapped in
    /// double quotes, so both `abc` and `"abc"` match the tag `abc`. Weak
    /// tags, lists and `*` never match.
    pub fn matches_if_none_match(&self, header: &str) -> bool {
        let unquoted = header
            .strip_prefix('"')
            .and_then(|h| h.strip_suffix('"'))
            .unwrap_or(header);
        unquoted == self.0
    }
}

impl fmt::Debug for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionTag({})", self.0)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
