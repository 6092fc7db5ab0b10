use std::fmt;

use crate::PatternError;
use crate::matcher;
use crate::vpath::VPath;

/// Reports whether `c` separates path segments.
///
/// Globs and vpaths are written with `/` everywhere; the platform's native
/// separator is accepted as well so Windows-style strings tokenize the same
/// way.
pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

/// Splits a path or glob string into its segments.
///
/// Runs of separators collapse into a single boundary, and leading or
/// trailing separators contribute no segments: `"//a/b/"` tokenizes to
/// `["a", "b"]`.
#[must_use]
pub fn tokenize(path: &str) -> Vec<String> {
    path.split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One compiled glob segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Token {
    /// `**`: matches zero or more whole path segments.
    AnySegments,
    /// A single segment, possibly containing `*` and `?` wildcards.
    Literal(String),
}

/// A single Ant-style glob compiled into an ordered segment-token sequence.
///
/// Compiled once when the selection policy is installed and immutable
/// afterwards. Matching consumes the token sequence; the raw text is kept
/// for display and diagnostics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern {
    raw: String,
    rooted: bool,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Compiles `glob` into a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Blank`] when `glob` is empty or
    /// whitespace-only. Every other input compiles.
    pub fn new(glob: impl Into<String>) -> Result<Self, PatternError> {
        let raw = glob.into();
        if raw.trim().is_empty() {
            return Err(PatternError::Blank);
        }
        let rooted = raw.chars().next().is_some_and(is_separator);
        let tokens = tokenize(&raw)
            .into_iter()
            .map(|segment| {
                if segment == "**" {
                    Token::AnySegments
                } else {
                    Token::Literal(segment)
                }
            })
            .collect();
        Ok(Self { raw, rooted, tokens })
    }

    /// Returns the glob text exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Reports whether the glob starts with a separator.
    ///
    /// A rooted pattern only matches rooted paths, and vice versa.
    #[must_use]
    pub const fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Tests whether `path` is matched in full.
    ///
    /// The entire segment sequence of `path` must be consumed against the
    /// entire token sequence. A `**` token absorbs zero or more segments;
    /// split points are tried left to right until one works, since only the
    /// existence of a valid split matters.
    #[must_use]
    pub fn matches(&self, path: &VPath, case_sensitive: bool) -> bool {
        if self.rooted != path.is_rooted() {
            return false;
        }
        matcher::match_tokens(&self.tokens, path.segments(), case_sensitive)
    }

    /// Tests whether `path` could be extended into a full match.
    ///
    /// Succeeds when every segment supplied so far matches its token and the
    /// unconsumed remainder of the pattern is still satisfiable by deeper
    /// segments. A directory failing [`matches`](Self::matches) against
    /// every include pattern may still need its subtree visited when this
    /// predicate holds.
    #[must_use]
    pub fn matches_prefix(&self, path: &VPath, case_sensitive: bool) -> bool {
        if self.rooted != path.is_rooted() {
            return false;
        }
        matcher::match_tokens_prefix(&self.tokens, path.segments(), case_sensitive)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
