use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use patterns::{PatternSet, VPath};
use tracing::{debug, warn};

use crate::consumer::Consumer;
use crate::entry::{EntryKind, ScanEntry};
use crate::error::ScanError;
use crate::symlink;

/// Streams the selected filesystem entries beneath a root to a consumer.
///
/// The traversal is depth-first and pre-order: a directory is delivered
/// before any of its children, and children are visited in lexical order by
/// name so repeated scans over an unchanged tree yield the same sequence.
/// One `Scanner` runs one scan at a time; rerunning starts from scratch.
#[derive(Clone, Debug)]
pub struct Scanner {
    root: PathBuf,
    follow_symlinks: bool,
    patterns: PatternSet,
}

/// How a classified entry participates in traversal.
enum Role {
    Directory,
    File,
    Skip,
}

impl Scanner {
    pub(crate) fn new(root: PathBuf, follow_symlinks: bool, patterns: PatternSet) -> Self {
        Self {
            root,
            follow_symlinks,
            patterns,
        }
    }

    /// Returns the configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the compiled selection policy for this scanner.
    #[must_use]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Walks the tree and delivers every accepted entry to `consumer`.
    ///
    /// The root is validated first: a missing root or a root that is not a
    /// directory fails before any entry is emitted. The synthetic root
    /// entry (empty vpath) is delivered when the policy accepts it, then
    /// the recursion descends.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] for an invalid root, any I/O failure while
    /// listing directories or reading metadata, or any error raised by the
    /// consumer. Entries already delivered are not retracted.
    pub fn scan<C>(&self, consumer: &mut C) -> Result<(), ScanError>
    where
        C: Consumer + ?Sized,
    {
        let root_metadata = fs::symlink_metadata(&self.root)
            .map_err(|error| ScanError::root_metadata(self.root.clone(), error))?;

        // A root reached through a link still counts as a directory when
        // its target is one.
        let is_dir = if root_metadata.file_type().is_symlink() {
            fs::metadata(&self.root)
                .map_err(|error| ScanError::root_metadata(self.root.clone(), error))?
                .is_dir()
        } else {
            root_metadata.is_dir()
        };
        if !is_dir {
            return Err(ScanError::root_not_directory(self.root.clone()));
        }

        debug!(root = %self.root.display(), "starting scan");

        let root_vpath = VPath::new("");
        if self.patterns.is_included(&root_vpath) && !self.patterns.is_excluded(&root_vpath) {
            let entry = ScanEntry {
                full_path: self.root.clone(),
                vpath: String::new(),
                kind: EntryKind::Directory,
                metadata: root_metadata,
                is_root: true,
            };
            consumer
                .accept(entry)
                .map_err(|error| ScanError::consumer(String::new(), error))?;
        }

        let mut visited = HashSet::new();
        if self.follow_symlinks {
            match fs::canonicalize(&self.root) {
                Ok(canonical) => {
                    visited.insert(canonical);
                }
                Err(error) => {
                    warn!(
                        path = %self.root.display(),
                        %error,
                        "could not canonicalize scan root for cycle tracking"
                    );
                }
            }
        }

        self.scan_dir(&self.root, &root_vpath, &mut visited, consumer)
    }

    /// Lists `dir`, classifies each child, and applies the selection policy.
    fn scan_dir<C>(
        &self,
        dir: &Path,
        vpath: &VPath,
        visited: &mut HashSet<PathBuf>,
        consumer: &mut C,
    ) -> Result<(), ScanError>
    where
        C: Consumer + ?Sized,
    {
        if !self.follow_symlinks && symlink::is_symlink(dir) {
            // Children of a directory reached through a link are suppressed
            // before classification.
            debug!(path = %dir.display(), "suppressing children of symlinked directory");
            return Ok(());
        }

        let mut names = Vec::new();
        let read_dir =
            fs::read_dir(dir).map_err(|error| ScanError::read_dir(dir.to_path_buf(), error))?;
        for entry in read_dir {
            let entry =
                entry.map_err(|error| ScanError::read_dir_entry(dir.to_path_buf(), error))?;
            names.push(entry.file_name());
        }
        names.sort();

        for name in names {
            let Some(name) = name.to_str() else {
                // Globs are Unicode text; a name that is not valid UTF-8
                // can never match one.
                warn!(path = %dir.display(), "skipping entry with non-UTF-8 name");
                continue;
            };

            let full_path = dir.join(name);
            let child_vpath = vpath.child(name);

            let metadata = fs::symlink_metadata(&full_path)
                .map_err(|error| ScanError::metadata(full_path.clone(), error))?;
            let file_type = metadata.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                EntryKind::Symlink
            } else {
                EntryKind::Other
            };

            let role = self.classify_role(kind, &full_path);

            match role {
                Role::Directory => {
                    if self.patterns.is_included(&child_vpath)
                        && !self.patterns.is_excluded(&child_vpath)
                    {
                        let entry = ScanEntry {
                            full_path: full_path.clone(),
                            vpath: child_vpath.as_str().to_owned(),
                            kind,
                            metadata,
                            is_root: false,
                        };
                        consumer.accept(entry).map_err(|error| {
                            ScanError::consumer(child_vpath.as_str().to_owned(), error)
                        })?;
                        self.descend(&full_path, &child_vpath, visited, consumer)?;
                    } else if self.patterns.could_hold_included(&child_vpath) {
                        // Not reportable itself, but a deeper include could
                        // still match.
                        self.descend(&full_path, &child_vpath, visited, consumer)?;
                    }
                }
                Role::File => {
                    if self.patterns.is_included(&child_vpath)
                        && !self.patterns.is_excluded(&child_vpath)
                    {
                        let entry = ScanEntry {
                            full_path,
                            vpath: child_vpath.as_str().to_owned(),
                            kind,
                            metadata,
                            is_root: false,
                        };
                        consumer.accept(entry).map_err(|error| {
                            ScanError::consumer(child_vpath.as_str().to_owned(), error)
                        })?;
                    }
                }
                Role::Skip => {}
            }
        }

        Ok(())
    }

    /// Decides how an entry of `kind` participates in traversal.
    ///
    /// A link participates as its target's type only while following is
    /// enabled; an unresolvable link has nothing to classify and is
    /// skipped.
    fn classify_role(&self, kind: EntryKind, full_path: &Path) -> Role {
        match kind {
            EntryKind::Directory => Role::Directory,
            EntryKind::File => Role::File,
            EntryKind::Symlink if self.follow_symlinks => match fs::metadata(full_path) {
                Ok(target) if target.is_dir() => Role::Directory,
                Ok(target) if target.is_file() => Role::File,
                Ok(_) => Role::Skip,
                Err(error) => {
                    debug!(
                        path = %full_path.display(),
                        %error,
                        "skipping unresolvable symlink"
                    );
                    Role::Skip
                }
            },
            EntryKind::Symlink | EntryKind::Other => Role::Skip,
        }
    }

    /// Recurses into `dir`, guarding against link cycles when following.
    fn descend<C>(
        &self,
        dir: &Path,
        vpath: &VPath,
        visited: &mut HashSet<PathBuf>,
        consumer: &mut C,
    ) -> Result<(), ScanError>
    where
        C: Consumer + ?Sized,
    {
        if self.follow_symlinks {
            match fs::canonicalize(dir) {
                Ok(canonical) => {
                    if !visited.insert(canonical) {
                        debug!(path = %dir.display(), "already visited, skipping link cycle");
                        return Ok(());
                    }
                }
                Err(error) => {
                    // Failing to resolve must not abort the scan.
                    warn!(
                        path = %dir.display(),
                        %error,
                        "could not canonicalize directory for cycle tracking"
                    );
                }
            }
        }
        self.scan_dir(dir, vpath, visited, consumer)
    }
}
