use thiserror::Error;

/// Error produced when a glob string cannot be compiled into a [`Pattern`].
///
/// Raised at configuration time, before any traversal starts. The Ant glob
/// dialect accepts almost any text; the rejected inputs are the ones that
/// can only be caller mistakes.
///
/// [`Pattern`]: crate::Pattern
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PatternError {
    /// The glob string was empty or contained only whitespace.
    #[error("glob pattern is blank")]
    Blank,
}
