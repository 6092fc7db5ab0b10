use crate::defaults::DEFAULT_EXCLUDES;
use crate::error::PatternError;
use crate::pattern::Pattern;
use crate::vpath::VPath;

/// Compiled, immutable selection policy for one scan.
///
/// Built once from raw glob strings and queried for every candidate path a
/// traversal produces. Three collections participate: includes (an empty
/// input compiles to the single pattern `**`, so everything is a
/// candidate), excludes (empty means nothing is excluded), and the built-in
/// [`DEFAULT_EXCLUDES`] table, which is always compiled and consulted only
/// while enabled.
///
/// All queries are pure; a malformed glob was already rejected when the set
/// was constructed.
///
/// # Examples
///
/// ```
/// use patterns::{PatternSet, VPath};
///
/// let set = PatternSet::from_globs(["**/*.class"], ["modules/**"])?;
///
/// assert!(set.is_included(&VPath::new("src/Main.class")));
/// assert!(set.is_excluded(&VPath::new("modules/x/Impl.class")));
/// assert!(!set.is_included(&VPath::new("src/Main.java")));
/// # Ok::<(), patterns::PatternError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PatternSet {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
    default_excludes: Vec<Pattern>,
    use_default_excludes: bool,
    case_sensitive: bool,
}

impl PatternSet {
    /// Compiles the supplied include and exclude globs.
    ///
    /// Defaults: the built-in exclusion table enabled, matching
    /// case-sensitive. Both can be changed with
    /// [`default_excludes`](Self::default_excludes) and
    /// [`case_sensitive`](Self::case_sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for the first glob that fails to compile;
    /// construction never partially succeeds.
    pub fn from_globs<I, E>(includes: I, excludes: E) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let mut compiled_includes = includes
            .into_iter()
            .map(Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;
        if compiled_includes.is_empty() {
            compiled_includes.push(Pattern::new("**")?);
        }
        let compiled_excludes = excludes
            .into_iter()
            .map(Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;
        let default_excludes = DEFAULT_EXCLUDES
            .iter()
            .copied()
            .map(Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            includes: compiled_includes,
            excludes: compiled_excludes,
            default_excludes,
            use_default_excludes: true,
            case_sensitive: true,
        })
    }

    /// Toggles the built-in exclusion table.
    #[must_use]
    pub fn default_excludes(mut self, enabled: bool) -> Self {
        self.use_default_excludes = enabled;
        self
    }

    /// Sets whether matching distinguishes case.
    ///
    /// Applies uniformly to every pattern in the set.
    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// True iff at least one include pattern matches `path` in full.
    ///
    /// With no includes configured this always holds: everything is a
    /// candidate until an exclude says otherwise.
    #[must_use]
    pub fn is_included(&self, path: &VPath) -> bool {
        self.includes
            .iter()
            .any(|pattern| pattern.matches(path, self.case_sensitive))
    }

    /// True iff `path` matches a caller exclude, or an entry of the
    /// built-in table while it is enabled.
    #[must_use]
    pub fn is_excluded(&self, path: &VPath) -> bool {
        self.excludes
            .iter()
            .any(|pattern| pattern.matches(path, self.case_sensitive))
            || (self.use_default_excludes
                && self
                    .default_excludes
                    .iter()
                    .any(|pattern| pattern.matches(path, self.case_sensitive)))
    }

    /// True iff some include pattern could still match below `path`.
    ///
    /// Consulted when a directory is not itself reportable, to decide
    /// whether its subtree must still be visited. The predicate
    /// over-approximates: visiting a subtree that turns out to hold nothing
    /// is acceptable, missing a match is not.
    #[must_use]
    pub fn could_hold_included(&self, path: &VPath) -> bool {
        self.includes
            .iter()
            .any(|pattern| pattern.matches_prefix(path, self.case_sensitive))
    }

    /// Reports whether matching distinguishes case.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}
