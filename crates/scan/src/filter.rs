use crate::options::ScanOptions;

/// Name-substring exclusion. Applies to files and directories alike, before
/// any other check; a matching directory is never descended into.
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    patterns: Vec<String>,
}

impl ExclusionMatcher {
    /// Empty patterns are dropped; an empty substring would match every name.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        ExclusionMatcher { patterns }
    }

    pub fn from_options(options: &ScanOptions) -> Self {
        Self::new(&options.exclude_patterns)
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, entry_name: &str) -> bool {
        let name = entry_name.to_lowercase();
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }
}

/// Decides whether a file is worth recording at all. Directories never pass
/// through here; they are filtered only by exclusion and depth.
#[derive(Debug, Clone)]
pub struct RelevanceClassifier {
    markers: Vec<String>,
    extensions: Vec<String>,
}

impl RelevanceClassifier {
    pub fn new<I, J, S, T>(markers: I, extensions: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|m| m.as_ref().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();

        // Extensions are stored lowercase with the leading dot so they
        // compare directly against what the walker extracts.
        let extensions = extensions
            .into_iter()
            .map(|e| {
                let e = e.as_ref().to_lowercase();
                if e.starts_with('.') {
                    e
                } else {
                    format!(".{e}")
                }
            })
            .collect();

        RelevanceClassifier {
            markers,
            extensions,
        }
    }

    pub fn from_options(options: &ScanOptions) -> Self {
        Self::new(&options.special_markers, &options.include_extensions)
    }

    /// Special markers win regardless of extension; otherwise the extension
    /// must equal one allow-list entry. `extension` is expected lowercase
    /// with leading dot, or empty for extensionless names.
    #[must_use]
    pub fn is_relevant(&self, file_name: &str, extension: &str) -> bool {
        let name = file_name.to_lowercase();
        if self.markers.iter().any(|m| name.contains(m.as_str())) {
            return true;
        }

        if extension.is_empty() {
            return false;
        }

        let ext = extension.to_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
