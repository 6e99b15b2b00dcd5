use std::{io, path::PathBuf};

use crate::error::ScanError;

/// Normalize a caller-supplied path string and verify it exists.
///
/// Accepts both `\`-style and `/`-style separators, strips trailing
/// separators, and canonicalizes to an absolute path. This runs once before
/// traversal; failures here are the fatal tier, never per-entry diagnostics.
pub fn normalize_root(input: &str) -> Result<PathBuf, ScanError> {
    let mut cleaned: String = input
        .trim()
        .chars()
        .map(|c| {
            if c == '\\' {
                std::path::MAIN_SEPARATOR
            } else {
                c
            }
        })
        .collect();

    while cleaned.len() > 1 && cleaned.ends_with(std::path::MAIN_SEPARATOR) {
        cleaned.pop();
    }

    if cleaned.is_empty() {
        return Err(ScanError::PathNotFound(PathBuf::from(input)));
    }

    let path = PathBuf::from(cleaned);
    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScanError::PathNotFound(path)),
        Err(e) => Err(ScanError::RootUnreadable(path, e)),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
