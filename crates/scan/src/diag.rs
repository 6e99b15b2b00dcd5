use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

/// One recoverable traversal failure. Issues never abort a scan; they are
/// handed to the caller's sink and the walk continues with the remaining
/// siblings and subtrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssue {
    pub path: PathBuf,
    pub detail: String,
}

impl ScanIssue {
    pub fn new(path: &Path, detail: String) -> Self {
        Self {
            path: path.to_path_buf(),
            detail,
        }
    }
}

/// Side channel for recoverable failures (stat errors, unreadable
/// directories, broken symlinks).
pub trait DiagnosticSink {
    fn report(&mut self, issue: ScanIssue);
}

/// Default sink: forwards to the log facade and keeps nothing.
#[derive(Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, issue: ScanIssue) {
        warn!("[walk] {}: {}", issue.path.display(), issue.detail);
    }
}

/// Collecting sink for testing and for callers that return issues alongside
/// the result list.
#[derive(Default)]
pub struct CollectSink {
    issues: Vec<ScanIssue>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[ScanIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ScanIssue> {
        self.issues
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, issue: ScanIssue) {
        self.issues.push(issue);
    }
}
