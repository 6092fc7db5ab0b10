//! Built-in exclusion table for common non-content artifacts.

/// Globs excluded by default when the built-in table is enabled.
///
/// Covers version-control metadata, editor backup and temporary files, and
/// OS metadata files. The table is toggled as a unit; individual entries are
/// not configurable. Enabling it appends to caller-supplied excludes, it
/// never replaces them.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Editor backup and temporary files
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    // CVS
    "**/CVS",
    "**/CVS/**",
    "**/.cvsignore",
    // RCS
    "**/RCS",
    "**/RCS/**",
    // SCCS
    "**/SCCS",
    "**/SCCS/**",
    // Visual SourceSafe
    "**/vssver.scc",
    // Subversion
    "**/.svn",
    "**/.svn/**",
    // Arch
    "**/.arch-ids",
    "**/.arch-ids/**",
    // Bazaar
    "**/.bzr",
    "**/.bzr/**",
    // Mercurial
    "**/.hg",
    "**/.hg/**",
    // Git
    "**/.git",
    "**/.git/**",
    "**/.gitignore",
    "**/.gitattributes",
    // BitKeeper
    "**/BitKeeper",
    "**/BitKeeper/**",
    "**/ChangeSet",
    "**/ChangeSet/**",
    // darcs
    "**/_darcs",
    "**/_darcs/**",
    "**/.darcsrepo",
    "**/.darcsrepo/**",
    // macOS Finder metadata
    "**/.DS_Store",
];
