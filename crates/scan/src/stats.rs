use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::categorize::Category;
use crate::entry::{EntryKind, ScanEntry};

/// Aggregate summary of one result list. Always recomputed fresh from the
/// entries, never updated incrementally by the walker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStatistics {
    pub total_files: usize,
    pub total_directories: usize,
    /// Sum of `size` over file entries, in bytes.
    pub total_size: u64,
    /// File count per category. Labels with zero occurrences are omitted.
    pub categories: HashMap<Category, usize>,
    /// File count per extension, same zero-omission rule.
    pub extensions: HashMap<String, usize>,
}

/// Pure reduction over a result list.
pub fn aggregate(entries: &[ScanEntry]) -> ScanStatistics {
    let mut stats = ScanStatistics::default();

    for entry in entries {
        match entry.entry_kind {
            EntryKind::Directory => {
                stats.total_directories += 1;
            }
            EntryKind::File => {
                stats.total_files += 1;
                stats.total_size += entry.size.unwrap_or(0);

                if let Some(category) = entry.category {
                    *stats.categories.entry(category).or_insert(0) += 1;
                }
                if let Some(extension) = &entry.extension {
                    *stats.extensions.entry(extension.clone()).or_insert(0) += 1;
                }
            }
        }
    }

    stats
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
