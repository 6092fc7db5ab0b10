//! End-to-end selection scenarios.
//!
//! Each test builds a small fixture tree, runs a configured scan, and
//! asserts on the exact ordered sequence of delivered vpaths — the contract
//! archiving callers rely on.

use scan::{ScanBuilder, ScanEntry, Scanner};
use std::fs;
use std::path::Path;

fn write_tree(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, b"fixture").expect("write fixture file");
    }
}

fn vpaths(scanner: &Scanner) -> Vec<String> {
    let mut accepted: Vec<ScanEntry> = Vec::new();
    scanner.scan(&mut accepted).expect("scan succeeds");
    accepted
        .into_iter()
        .filter(|entry| !entry.is_root())
        .map(|entry| entry.vpath().to_owned())
        .collect()
}

#[test]
fn everything_is_selected_by_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &["a.txt", "sub/b.txt"]);

    let scanner = ScanBuilder::new(temp.path()).build().expect("build");
    assert_eq!(vpaths(&scanner), ["a.txt", "sub", "sub/b.txt"]);
}

#[test]
fn classes_outside_modules() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(
        temp.path(),
        &["src/Main.class", "src/Main.java", "modules/x/Readme.txt"],
    );

    let scanner = ScanBuilder::new(temp.path())
        .includes(["**/*.class"])
        .excludes(["modules/**"])
        .build()
        .expect("build");

    assert_eq!(vpaths(&scanner), ["src/Main.class"]);
}

#[test]
fn deep_include_survives_a_shallow_directory_exclude() {
    // Excluding the directories under "modules" must not prevent a deeper
    // include from selecting files the exclude does not cover.
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(
        temp.path(),
        &[
            "modules/a/lib/keep.jar",
            "modules/a/notes.txt",
            "modules/b/lib/keep.jar",
        ],
    );

    let scanner = ScanBuilder::new(temp.path())
        .includes(["modules/*/lib/*.jar"])
        .excludes(["modules/*"])
        .build()
        .expect("build");

    assert_eq!(
        vpaths(&scanner),
        ["modules/a/lib/keep.jar", "modules/b/lib/keep.jar"]
    );
}

#[test]
fn directory_entries_are_selected_like_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &["docs/guide/index.md", "src/lib.rs"]);

    let scanner = ScanBuilder::new(temp.path())
        .includes(["docs/**"])
        .build()
        .expect("build");

    assert_eq!(
        vpaths(&scanner),
        ["docs", "docs/guide", "docs/guide/index.md"]
    );
}

#[test]
fn question_mark_selection_in_a_named_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(
        temp.path(),
        &["test/abc.java", "test/ab.java", "test/axyz.java", "other/abc.java"],
    );

    let scanner = ScanBuilder::new(temp.path())
        .includes(["test/a??.java"])
        .build()
        .expect("build");

    assert_eq!(vpaths(&scanner), ["test/abc.java"]);
}

#[test]
fn multiple_includes_accumulate() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &["a.rs", "b.toml", "c.lock", "d.md"]);

    let scanner = ScanBuilder::new(temp.path())
        .includes(["*.rs", "*.toml"])
        .build()
        .expect("build");

    assert_eq!(vpaths(&scanner), ["a.rs", "b.toml"]);
}

#[test]
fn multiple_excludes_accumulate() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &["a.rs", "b.tmp", "c.bak", "d.rs"]);

    let scanner = ScanBuilder::new(temp.path())
        .excludes(["*.tmp", "*.bak"])
        .build()
        .expect("build");

    assert_eq!(vpaths(&scanner), ["a.rs", "d.rs"]);
}

#[test]
fn vcs_noise_disappears_under_default_excludes() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(
        temp.path(),
        &[".git/HEAD", ".svn/entries", "src/lib.rs", "src/lib.rs~"],
    );

    let scanner = ScanBuilder::new(temp.path()).build().expect("build");
    assert_eq!(vpaths(&scanner), ["src", "src/lib.rs"]);
}

#[test]
fn caller_excludes_survive_disabling_the_default_table() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[".git/HEAD", "build/out.bin", "src/lib.rs"]);

    let scanner = ScanBuilder::new(temp.path())
        .excludes(["build/**"])
        .default_excludes(false)
        .build()
        .expect("build");

    assert_eq!(
        vpaths(&scanner),
        [".git", ".git/HEAD", "src", "src/lib.rs"]
    );
}

#[test]
fn closure_consumers_receive_entries_in_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &["one.txt", "two.txt"]);

    let scanner = ScanBuilder::new(temp.path()).build().expect("build");

    let mut names = Vec::new();
    let mut consumer = |entry: ScanEntry| -> std::io::Result<()> {
        names.push(entry.file_name().to_owned());
        Ok(())
    };
    scanner.scan(&mut consumer).expect("scan");

    assert_eq!(names, ["", "one.txt", "two.txt"]);
}
