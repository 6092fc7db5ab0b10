use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use patterns::PatternError;

/// Error returned when a scan cannot be configured or completed.
#[derive(Debug)]
pub struct ScanError {
    kind: ScanErrorKind,
}

impl ScanError {
    fn new(kind: ScanErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::RootMetadata { path, source })
    }

    pub(crate) fn root_not_directory(path: PathBuf) -> Self {
        Self::new(ScanErrorKind::RootNotDirectory { path })
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::Metadata { path, source })
    }

    pub(crate) fn consumer(vpath: String, source: io::Error) -> Self {
        Self::new(ScanErrorKind::Consumer { vpath, source })
    }

    /// Returns the specific failure that stopped the scan.
    #[must_use]
    pub fn kind(&self) -> &ScanErrorKind {
        &self.kind
    }
}

impl From<PatternError> for ScanError {
    fn from(source: PatternError) -> Self {
        Self::new(ScanErrorKind::Pattern { source })
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScanErrorKind::Pattern { source } => {
                write!(f, "failed to compile selection patterns: {source}")
            }
            ScanErrorKind::RootMetadata { path, source } => {
                write!(f, "failed to inspect scan root '{}': {}", path.display(), source)
            }
            ScanErrorKind::RootNotDirectory { path } => {
                write!(f, "scan root '{}' is not a directory", path.display())
            }
            ScanErrorKind::ReadDir { path, source } => {
                write!(f, "failed to read directory '{}': {}", path.display(), source)
            }
            ScanErrorKind::ReadDirEntry { path, source } => {
                write!(f, "failed to read entry in '{}': {}", path.display(), source)
            }
            ScanErrorKind::Metadata { path, source } => {
                write!(
                    f,
                    "failed to inspect metadata for '{}': {}",
                    path.display(),
                    source
                )
            }
            ScanErrorKind::Consumer { vpath, source } => {
                if vpath.is_empty() {
                    write!(f, "consumer rejected the root entry: {source}")
                } else {
                    write!(f, "consumer rejected entry '{vpath}': {source}")
                }
            }
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ScanErrorKind::Pattern { source } => Some(source),
            ScanErrorKind::RootNotDirectory { .. } => None,
            ScanErrorKind::RootMetadata { source, .. }
            | ScanErrorKind::ReadDir { source, .. }
            | ScanErrorKind::ReadDirEntry { source, .. }
            | ScanErrorKind::Metadata { source, .. }
            | ScanErrorKind::Consumer { source, .. } => Some(source),
        }
    }
}

/// Classification of scan failures.
#[derive(Debug)]
pub enum ScanErrorKind {
    /// A selection glob failed to compile; raised at configuration time.
    Pattern {
        /// Underlying compilation error.
        source: PatternError,
    },
    /// Failed to query metadata for the scan root; the root is missing or
    /// unreadable. Raised before any traversal.
    RootMetadata {
        /// Root path that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The scan root exists but is not a directory. Raised before any
    /// traversal.
    RootNotDirectory {
        /// The offending root path.
        path: PathBuf,
    },
    /// Failed to read the contents of a directory during traversal.
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to retrieve metadata needed to classify an entry.
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The consumer rejected an entry; the scan stopped where it was.
    Consumer {
        /// Relative path of the entry being delivered; empty for the root.
        vpath: String,
        /// The consumer's error, unchanged.
        source: io::Error,
    },
}
