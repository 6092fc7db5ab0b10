use std::fs;
use std::path::{Path, PathBuf};

/// Classification of a filesystem entry, decided once when its metadata is
/// read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link. When following is enabled, the link target's type
    /// (resolved once) decides whether the entry traverses as a directory
    /// or a file; the reported kind stays `Symlink`.
    Symlink,
    /// Anything else: sockets, device nodes, and other special files.
    /// Never emitted and never descended into.
    Other,
}

/// A filesystem entry accepted by a scan and delivered to the consumer.
#[derive(Debug)]
pub struct ScanEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) vpath: String,
    pub(crate) kind: EntryKind,
    pub(crate) metadata: fs::Metadata,
    pub(crate) is_root: bool,
}

impl ScanEntry {
    /// Returns the entry's on-disk path, rooted at the configured scan root.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the scan root, `/`-joined.
    ///
    /// Empty for the root entry itself.
    #[must_use]
    pub fn vpath(&self) -> &str {
        &self.vpath
    }

    /// Returns the final path segment, or the empty string for the root
    /// entry.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.vpath.rsplit('/').next().unwrap_or("")
    }

    /// Returns the entry's classification.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Provides the [`fs::Metadata`] captured when the entry was classified.
    ///
    /// Link metadata, not the target's: for a [`EntryKind::Symlink`] entry
    /// this describes the link itself.
    #[must_use]
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Indicates whether this is the synthetic entry for the scan root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }
}
