//! Integration tests for Ant-style glob matching.
//!
//! These tests cover the pattern syntax end to end: per-segment `*` and `?`
//! wildcards, the whole-segment `**` wildcard, rooted patterns, and the
//! interplay of include and exclude sets as an archiving caller would
//! configure them.

use patterns::{Pattern, PatternSet, VPath};

fn matches(glob: &str, path: &str) -> bool {
    Pattern::new(glob)
        .expect("glob compiles")
        .matches(&VPath::new(path), true)
}

fn prefix(glob: &str, path: &str) -> bool {
    Pattern::new(glob)
        .expect("glob compiles")
        .matches_prefix(&VPath::new(path), true)
}

// ============================================================================
// Single Star Wildcard (*)
// ============================================================================

/// Verifies `*` matches any run of characters within one segment.
#[test]
fn star_matches_any_run_in_a_segment() {
    assert!(matches("src/*.class", "src/Main.class"));
    assert!(matches("src/*", "src/anything"));
    assert!(matches("file*", "file"));
}

/// Verifies `*` never crosses a segment boundary.
#[test]
fn star_does_not_cross_separators() {
    assert!(!matches("src/*.class", "src/sub/Main.class"));
    assert!(!matches("*", "a/b"));
}

/// Verifies multiple `*` within one segment backtrack correctly.
#[test]
fn multiple_stars_in_one_segment() {
    assert!(matches("*_*_*.txt", "a_b_c.txt"));
    assert!(!matches("*_*_*.txt", "a_b.txt"));
}

// ============================================================================
// Question Mark Wildcard (?)
// ============================================================================

/// Verifies `?` matches exactly one character.
#[test]
fn question_mark_is_exactly_one_character() {
    assert!(matches("test/a??.java", "test/abc.java"));
    assert!(!matches("test/a??.java", "test/ab.java"));
    assert!(!matches("test/a??.java", "test/abcd.java"));
}

// ============================================================================
// Whole-Segment Wildcard (**)
// ============================================================================

/// Verifies `**` matches zero segments.
#[test]
fn double_star_matches_zero_segments() {
    assert!(matches("A/**", "A"));
    assert!(matches("**/A", "A"));
    assert!(matches("A/**/B", "A/B"));
}

/// Verifies `**` matches arbitrarily many segments.
#[test]
fn double_star_matches_many_segments() {
    assert!(matches("A/**", "A/B/C/D"));
    assert!(matches("**/*.class", "a/b/c/Main.class"));
    assert!(matches("**/test/**/XYZ*", "abc/test/def/ghi/XYZ123"));
}

/// Verifies a lone `**` matches everything including the empty path.
#[test]
fn lone_double_star_matches_everything() {
    assert!(matches("**", ""));
    assert!(matches("**", "a"));
    assert!(matches("**", "a/b/c"));
}

/// Verifies adjacent `**` tokens collapse.
#[test]
fn adjacent_double_stars_collapse() {
    assert!(matches("**/**/a", "a"));
    assert!(matches("a/**/**", "a/b"));
}

/// Verifies `**` only acts as the multi-segment wildcard when it is the
/// whole segment.
#[test]
fn embedded_double_star_is_literal_wildcards() {
    assert!(matches("a**b", "aXXb"));
    assert!(!matches("a**b", "a/b"));
}

// ============================================================================
// Rooted Patterns
// ============================================================================

/// Verifies a rooted pattern and a relative path never match.
#[test]
fn rooted_agreement_is_required() {
    assert!(matches("/a/b", "/a/b"));
    assert!(!matches("/a/b", "a/b"));
    assert!(!matches("a/b", "/a/b"));
}

// ============================================================================
// Prefix Matching (traversal pruning)
// ============================================================================

/// Verifies every ancestor of a matchable path is a possible prefix.
#[test]
fn ancestors_are_possible_prefixes() {
    assert!(prefix("modules/**/keep/*.jar", "modules"));
    assert!(prefix("modules/**/keep/*.jar", "modules/a/b/keep"));
    assert!(prefix("a/b/c.txt", "a"));
    assert!(prefix("a/b/c.txt", "a/b"));
}

/// Verifies a diverging path is not a possible prefix.
#[test]
fn diverging_paths_are_not_prefixes() {
    assert!(!prefix("a/b/c.txt", "x"));
    assert!(!prefix("a/b/c.txt", "a/x"));
}

/// Verifies a path longer than a literal pattern is not a prefix.
#[test]
fn overlong_paths_are_not_prefixes() {
    assert!(!prefix("a/b", "a/b/c"));
    assert!(prefix("a/**", "a/b/c"));
}

// ============================================================================
// Selection Policy
// ============================================================================

/// Verifies the documented archiving scenario: classes in, modules out.
#[test]
fn class_files_outside_modules() {
    let set = PatternSet::from_globs(["**/*.class"], ["modules/**"]).expect("compiles");

    let accepted = VPath::new("src/Main.class");
    assert!(set.is_included(&accepted) && !set.is_excluded(&accepted));

    let wrong_kind = VPath::new("src/Main.java");
    assert!(!set.is_included(&wrong_kind));

    let excluded = VPath::new("modules/x/Impl.class");
    assert!(set.is_included(&excluded) && set.is_excluded(&excluded));
}

/// Verifies an exclude does not suppress the pruning predicate.
#[test]
fn excluded_directory_can_still_hold_includes() {
    let set = PatternSet::from_globs(["test/keep/**"], ["test/**"]).expect("compiles");
    let dir = VPath::new("test");
    assert!(set.is_excluded(&VPath::new("test/other.txt")));
    assert!(set.could_hold_included(&dir));
}
