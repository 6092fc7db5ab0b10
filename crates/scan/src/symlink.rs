//! Symbolic-link detection for the no-follow policy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Reports whether `path` is a symbolic link.
///
/// The platform's link attribute is authoritative. When it cannot be read,
/// the canonicalized path is compared against the logical absolute path; a
/// mismatch means a link was traversed somewhere in the chain. Path
/// comparison can produce false positives on case-insensitive or
/// junction-aware filesystems, which is why the attribute is preferred.
///
/// Detection failures are never fatal: they are logged and the path is
/// treated as not a link, so a scan keeps going.
pub(crate) fn is_symlink(path: &Path) -> bool {
    match fs::symlink_metadata(path) {
        Ok(metadata) => metadata.file_type().is_symlink(),
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "link attribute unavailable, comparing resolved paths"
            );
            match resolves_elsewhere(path) {
                Ok(elsewhere) => elsewhere,
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        %error,
                        "symlink detection failed, treating as a regular path"
                    );
                    false
                }
            }
        }
    }
}

fn resolves_elsewhere(path: &Path) -> io::Result<bool> {
    let canonical = fs::canonicalize(path)?;
    let logical = absolutize(path)?;
    Ok(canonical != logical)
}

fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
