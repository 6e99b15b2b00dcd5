use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::categorize::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One recorded file or directory. Never mutated after creation; the result
/// list belongs to the caller once the walk returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
    /// Absolute, normalized path. Unique within one scan's result list.
    pub path: PathBuf,
    /// Base name (last path segment)
    pub name: String,
    pub entry_kind: EntryKind,
    /// Byte count, files only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Lowercase extension with leading dot, or empty string. Files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Semantic label, files only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Last modification time in seconds since the Unix epoch, 0 when the
    /// filesystem cannot report one.
    pub last_modified: u64,
}

impl ScanEntry {
    pub fn directory(path: PathBuf, name: String, last_modified: u64) -> Self {
        Self {
            path,
            name,
            entry_kind: EntryKind::Directory,
            size: None,
            extension: None,
            category: None,
            last_modified,
        }
    }

    pub fn file(
        path: PathBuf,
        name: String,
        size: u64,
        extension: String,
        category: Category,
        last_modified: u64,
    ) -> Self {
        Self {
            path,
            name,
            entry_kind: EntryKind::File,
            size: Some(size),
            extension: Some(extension),
            category: Some(category),
            last_modified,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.entry_kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.entry_kind == EntryKind::File
    }
}
