#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `scan` walks a directory tree depth-first, classifies every entry
//! against an Ant-style include/exclude policy, and streams the accepted
//! entries to a caller-supplied [`Consumer`]. It exists for
//! packaging/archiving callers that select a subset of a tree — "all
//! `.class` files except those under `modules/`" — without reading file
//! contents or building an index.
//!
//! # Design
//!
//! - [`ScanBuilder`] configures the root, the include/exclude globs, the
//!   built-in default-exclude table, case sensitivity, and symlink
//!   following. `build()` compiles the patterns; a malformed glob is
//!   rejected here, before any filesystem access.
//! - [`Scanner::scan`] validates the root, emits a synthetic root entry
//!   when the policy accepts the empty relative path, then recurses.
//!   Directory children are sorted lexically by name so the emitted
//!   sequence is deterministic for an unchanged tree.
//! - A directory that is excluded (or simply not included) is still
//!   descended into when some include pattern could match deeper — the
//!   engine over-recurses rather than miss a match.
//! - [`ScanEntry`] carries the on-disk path, the root-relative vpath, the
//!   [`EntryKind`] classification, and the captured metadata.
//! - [`ScanError`] wraps every failure with the offending path so callers
//!   can surface actionable diagnostics.
//!
//! # Invariants
//!
//! - Delivery order is pre-order DFS: a directory is delivered before any
//!   of its children.
//! - Root validation happens before any entry is emitted; a missing root
//!   or a file root never produces partial output.
//! - A consumer error aborts the scan; entries already delivered stand.
//! - With symlink following disabled, no entry whose parent directory is a
//!   symbolic link is ever delivered. Symlink-detection anomalies are
//!   logged through `tracing` and never abort a scan.
//!
//! # Errors
//!
//! All failures surface as [`ScanError`]; [`ScanError::kind`] exposes the
//! classification and [`std::error::Error::source`] the underlying
//! [`std::io::Error`] where one exists.
//!
//! # Examples
//!
//! Collect the compiled classes of a source tree while skipping a vendored
//! module directory:
//!
//! ```
//! use scan::ScanBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir_all(root.join("src"))?;
//! fs::create_dir_all(root.join("modules/x"))?;
//! fs::write(root.join("src/Main.class"), b"\xca\xfe\xba\xbe")?;
//! fs::write(root.join("src/Main.java"), b"class Main {}")?;
//! fs::write(root.join("modules/x/Impl.class"), b"\xca\xfe\xba\xbe")?;
//!
//! let scanner = ScanBuilder::new(root)
//!     .includes(["**/*.class"])
//!     .excludes(["modules/**"])
//!     .build()?;
//!
//! let mut accepted = Vec::new();
//! scanner.scan(&mut accepted)?;
//!
//! let vpaths: Vec<&str> = accepted.iter().map(|entry| entry.vpath()).collect();
//! assert_eq!(vpaths, ["src/Main.class"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - [`patterns`] for the glob dialect and the selection policy this
//!   engine consults.

mod builder;
mod consumer;
mod entry;
mod error;
mod scanner;
mod symlink;

pub use builder::ScanBuilder;
pub use consumer::Consumer;
pub use entry::{EntryKind, ScanEntry};
pub use error::{ScanError, ScanErrorKind};
pub use scanner::Scanner;
