use std::path::PathBuf;

use patterns::PatternSet;

use crate::error::ScanError;
use crate::scanner::Scanner;

/// Configures a pattern-driven scan rooted at a specific directory.
///
/// Defaults match what archiving callers expect: everything included,
/// nothing excluded beyond the built-in noise table, case-sensitive
/// matching, symbolic links followed.
#[derive(Clone, Debug)]
pub struct ScanBuilder {
    root: PathBuf,
    includes: Vec<String>,
    excludes: Vec<String>,
    default_excludes: bool,
    case_sensitive: bool,
    follow_symlinks: bool,
}

impl ScanBuilder {
    /// Creates a new builder that will scan the provided root directory.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
            default_excludes: true,
            case_sensitive: true,
            follow_symlinks: true,
        }
    }

    /// Replaces the include globs.
    ///
    /// An empty list means everything is a candidate.
    #[must_use]
    pub fn includes<I>(mut self, globs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.includes = globs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the exclude globs.
    ///
    /// An empty list excludes nothing beyond the built-in table, when that
    /// is enabled.
    #[must_use]
    pub fn excludes<I>(mut self, globs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.excludes = globs.into_iter().map(Into::into).collect();
        self
    }

    /// Toggles the built-in exclusion table ([`patterns::DEFAULT_EXCLUDES`]).
    #[must_use]
    pub const fn default_excludes(mut self, enabled: bool) -> Self {
        self.default_excludes = enabled;
        self
    }

    /// Sets whether pattern matching distinguishes case.
    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Configures whether symbolic links are followed.
    ///
    /// When disabled, entries whose parent directory is itself a symbolic
    /// link are suppressed, and links are neither files nor directories for
    /// classification purposes.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Compiles the selection patterns and finalizes the configuration.
    ///
    /// The root itself is validated by [`Scanner::scan`], immediately before
    /// traversal.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] with a pattern kind when any glob fails to
    /// compile; compilation never partially succeeds.
    pub fn build(self) -> Result<Scanner, ScanError> {
        let patterns = PatternSet::from_globs(self.includes, self.excludes)?
            .default_excludes(self.default_excludes)
            .case_sensitive(self.case_sensitive);
        Ok(Scanner::new(self.root, self.follow_symlinks, patterns))
    }
}
