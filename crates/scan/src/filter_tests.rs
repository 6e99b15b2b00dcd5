use super::*;

fn default_relevance() -> RelevanceClassifier {
    RelevanceClassifier::from_options(&ScanOptions::default())
}

#[test]
fn exclusion_matches_substring_case_insensitively() {
    let matcher = ExclusionMatcher::new(["node_modules", ".git", "DIST"]);

    assert!(matcher.is_excluded("node_modules"));
    assert!(matcher.is_excluded("NODE_MODULES"));
    assert!(
        matcher.is_excluded("my_node_modules_backup"),
        "patterns match anywhere in the name"
    );
    assert!(matcher.is_excluded(".git"));
    assert!(matcher.is_excluded(".gitignore"), ".git is a substring");
    assert!(matcher.is_excluded("dist"));

    assert!(!matcher.is_excluded("src"));
    assert!(!matcher.is_excluded("git_notes.md"), "no leading dot here");
}

#[test]
fn exclusion_applies_to_files_and_directories_alike() {
    let matcher = ExclusionMatcher::new(["coverage"]);

    // Same predicate regardless of what kind of entry carries the name.
    assert!(matcher.is_excluded("coverage"));
    assert!(matcher.is_excluded("coverage.xml"));
}

#[test]
fn exclusion_drops_empty_patterns() {
    let matcher = ExclusionMatcher::new(["", "tmp"]);

    assert!(!matcher.is_excluded("anything"));
    assert!(matcher.is_excluded("tmp"));
}

#[test]
fn exclusion_with_no_patterns_excludes_nothing() {
    let matcher = ExclusionMatcher::new(Vec::<String>::new());
    assert!(!matcher.is_excluded("node_modules"));
}

#[test]
fn special_markers_win_regardless_of_extension() {
    let relevance = default_relevance();

    assert!(relevance.is_relevant("Dockerfile", ""));
    assert!(relevance.is_relevant("dockerfile.prod", ""));
    assert!(relevance.is_relevant("Makefile", ""));
    assert!(relevance.is_relevant("README", ""));
    assert!(relevance.is_relevant("readme.rst", ".rst"), ".rst is not allow-listed");
    assert!(relevance.is_relevant("LICENSE", ""));
    assert!(relevance.is_relevant(".dockerignore", ""));
    assert!(relevance.is_relevant(".gitignore", ""));
}

#[test]
fn extension_match_is_case_insensitive_equality() {
    let relevance = default_relevance();

    assert!(relevance.is_relevant("app.py", ".py"));
    assert!(relevance.is_relevant("APP.PY", ".PY"));
    assert!(relevance.is_relevant("notes.md", ".md"));

    assert!(!relevance.is_relevant("image.png", ".png"));
    assert!(!relevance.is_relevant("archive.tar", ".tar"));
}

#[test]
fn extensionless_file_without_marker_is_dropped() {
    let relevance = default_relevance();
    assert!(!relevance.is_relevant("somebinary", ""));
}

#[test]
fn custom_extension_list_accepts_entries_without_leading_dot() {
    let options = ScanOptions::default().with_include_extensions(["py", ".MD"]);
    let relevance = RelevanceClassifier::from_options(&options);

    assert!(relevance.is_relevant("a.py", ".py"));
    assert!(relevance.is_relevant("b.md", ".md"));
    assert!(!relevance.is_relevant("c.rs", ".rs"));
}

#[test]
fn substituted_markers_replace_the_defaults() {
    let options = ScanOptions::default().with_special_markers(["justfile"]);
    let relevance = RelevanceClassifier::from_options(&options);

    assert!(relevance.is_relevant("Justfile", ""));
    assert!(!relevance.is_relevant("Dockerfile", ""));
}
