use serde::{Deserialize, Serialize};

use scour_scan::{ScanEntry, ScanIssue, ScanOptions, ScanStatistics};

/// Request half of the scanner's serialization contract. Every option field
/// is optional; absent values fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_symlinks: Option<bool>,
    #[serde(default)]
    pub include_statistics: bool,
}

impl ScanRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_depth: None,
            include_extensions: None,
            exclude_patterns: None,
            follow_symlinks: None,
            include_statistics: false,
        }
    }

    /// Merge the caller's values over the built-in defaults.
    pub fn to_options(&self) -> ScanOptions {
        let mut options = ScanOptions::default();
        if let Some(depth) = self.max_depth {
            options.max_depth = depth;
        }
        if let Some(exts) = &self.include_extensions {
            options.include_extensions = exts.clone();
        }
        if let Some(patterns) = &self.exclude_patterns {
            options.exclude_patterns = patterns.clone();
        }
        if let Some(follow) = self.follow_symlinks {
            options.follow_symlinks = follow;
        }
        options
    }
}

/// Response half: the ordered entry list, statistics when the caller asked
/// for them, and any non-fatal issues hit along the way. An empty entry
/// list is a successful scan, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub entries: Vec<ScanEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ScanStatistics>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ScanIssue>,
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
