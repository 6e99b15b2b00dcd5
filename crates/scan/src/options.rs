use scour_runtime::{
    DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_EXTENSIONS, DEFAULT_MAX_DEPTH, SPECIAL_FILE_MARKERS,
};

/// Immutable policy for one scan. Built from the named defaults in
/// `scour-runtime`; tests substitute alternate lists through the `with_*`
/// builders instead of mutating shared state.
///
/// Pattern and extension matching is case-insensitive; the matchers lowercase
/// these lists at construction, so the fields may hold mixed-case input.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Depth bound. Depth 0 is the root itself.
    pub max_depth: usize,
    /// Extension allow-list for files (leading dot optional on input).
    pub include_extensions: Vec<String>,
    /// File names recorded regardless of extension (name-contains match).
    pub special_markers: Vec<String>,
    /// Entry-name substrings that remove a file, or a directory and its
    /// whole subtree, before any other check.
    pub exclude_patterns: Vec<String>,
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            include_extensions: to_owned_list(DEFAULT_INCLUDE_EXTENSIONS),
            special_markers: to_owned_list(SPECIAL_FILE_MARKERS),
            exclude_patterns: to_owned_list(DEFAULT_EXCLUDE_PATTERNS),
            follow_symlinks: false,
        }
    }
}

impl ScanOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_special_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
