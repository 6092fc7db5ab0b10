use std::fmt;

use crate::pattern::{is_separator, tokenize};

/// A candidate path relative to a scan root.
///
/// Held in both forms matching requires: the raw separator-joined string
/// (used for reporting and diagnostics) and the tokenized segment sequence
/// (used by the matcher). The empty vpath designates the scan root itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VPath {
    raw: String,
    rooted: bool,
    segments: Vec<String>,
}

impl VPath {
    /// Tokenizes `raw` into a candidate path.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let rooted = raw.chars().next().is_some_and(is_separator);
        let segments = tokenize(&raw);
        Self { raw, rooted, segments }
    }

    /// Returns the raw separator-joined form; empty for the scan root.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Reports whether the path starts with a separator.
    #[must_use]
    pub const fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Returns the tokenized segment sequence.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Extends the path with one child segment.
    ///
    /// Reuses the parent's tokenization instead of re-splitting the joined
    /// string; a traversal calls this once per directory entry.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let raw = if self.raw.is_empty() {
            name.to_owned()
        } else {
            format!("{}/{}", self.raw, name)
        };
        let mut segments = self.segments.clone();
        segments.push(name.to_owned());
        Self {
            raw,
            rooted: self.rooted,
            segments,
        }
    }
}

impl fmt::Display for VPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for VPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vpath_designates_the_root() {
        let root = VPath::new("");
        assert_eq!(root.as_str(), "");
        assert!(root.segments().is_empty());
        assert!(!root.is_rooted());
    }

    #[test]
    fn child_joins_with_single_separator() {
        let path = VPath::new("").child("src").child("Main.class");
        assert_eq!(path.as_str(), "src/Main.class");
        assert_eq!(path.segments(), ["src", "Main.class"]);
    }

    #[test]
    fn child_matches_fresh_tokenization() {
        let stepped = VPath::new("a").child("b").child("c.txt");
        let direct = VPath::new("a/b/c.txt");
        assert_eq!(stepped, direct);
    }

    #[test]
    fn rooted_flag_tracks_leading_separator() {
        assert!(VPath::new("/etc/hosts").is_rooted());
        assert!(!VPath::new("etc/hosts").is_rooted());
    }
}
