#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `patterns` provides Ant-style glob matching and the include/exclude
//! selection policy used by the treepack directory scanner. A glob is split
//! into path segments: `*` matches any run of characters within one segment,
//! `?` matches exactly one character, and a segment consisting solely of
//! `**` matches zero or more whole segments. A pattern beginning with a
//! separator only matches paths that are themselves rooted.
//!
//! # Design
//!
//! - [`Pattern`] compiles one glob string into an immutable token sequence.
//!   Compilation happens once, when the selection policy is installed; the
//!   raw text is retained for reporting.
//! - [`VPath`] carries a candidate path relative to the scan root in both of
//!   the forms matching needs: the raw separator-joined string and its
//!   tokenized segments.
//! - [`PatternSet`] owns the compiled include set, exclude set, and the
//!   built-in [`DEFAULT_EXCLUDES`] table, and answers the three questions a
//!   traversal asks: is this path included, is it excluded, and could an
//!   include pattern still match somewhere below it.
//!
//! # Invariants
//!
//! - A pattern with zero tokens matches only the empty path.
//! - With no include patterns configured, every path is a candidate: the
//!   empty include list compiles to the single pattern `**`.
//! - Enabling default excludes appends to the caller's excludes; it never
//!   replaces them.
//! - Case sensitivity is one flag applied uniformly to every pattern in the
//!   set.
//!
//! # Errors
//!
//! [`PatternSet::from_globs`] and [`Pattern::new`] report [`PatternError`]
//! when a glob string cannot be compiled. Construction never partially
//! succeeds; a set either compiles every pattern or reports the first
//! offender.
//!
//! # Examples
//!
//! Select compiled classes while keeping module directories out:
//!
//! ```
//! use patterns::{PatternSet, VPath};
//!
//! let set = PatternSet::from_globs(["**/*.class"], ["modules/**"])?;
//!
//! assert!(set.is_included(&VPath::new("src/Main.class")));
//! assert!(!set.is_included(&VPath::new("src/Main.java")));
//! assert!(set.is_excluded(&VPath::new("modules/x/Impl.class")));
//!
//! // "modules" itself is excluded, but a deeper include could still match,
//! // so a traversal must keep descending.
//! let set = PatternSet::from_globs(["modules/**/keep/*.jar"], ["modules/**"])?;
//! assert!(set.could_hold_included(&VPath::new("modules")));
//! # Ok::<(), patterns::PatternError>(())
//! ```
//!
//! # See also
//!
//! - The `scan` crate for the traversal engine that consults this policy.

mod defaults;
mod error;
mod matcher;
mod pattern;
mod set;
mod vpath;

pub use defaults::DEFAULT_EXCLUDES;
pub use error::PatternError;
pub use pattern::{Pattern, tokenize};
pub use set::PatternSet;
pub use vpath::VPath;
