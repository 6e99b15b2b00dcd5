use std::{fmt, io, path::PathBuf};

/// Whole-scan failures. Anything recoverable during traversal goes through
/// the diagnostic sink instead and never surfaces here.
#[derive(Debug)]
pub enum ScanError {
    /// The scan root does not exist.
    PathNotFound(PathBuf),
    /// The scan root exists but could not be read.
    RootUnreadable(PathBuf, io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::PathNotFound(path) => {
                write!(f, "path not found: {}", path.display())
            }
            ScanError::RootUnreadable(path, e) => {
                write!(f, "cannot read scan root {}: {e}", path.display())
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::PathNotFound(_) => None,
            ScanError::RootUnreadable(_, e) => Some(e),
        }
    }
}
