use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic label assigned to every relevant file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Configuration,
    Documentation,
    Script,
    SourceCode,
    Log,
    Database,
    Container,
    Infrastructure,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Configuration => "configuration",
            Category::Documentation => "documentation",
            Category::Script => "script",
            Category::SourceCode => "source-code",
            Category::Log => "log",
            Category::Database => "database",
            Category::Container => "container",
            Category::Infrastructure => "infrastructure",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CONFIGURATION_EXTS: &[&str] = &[
    ".conf", ".config", ".cfg", ".ini", ".yaml", ".yml", ".json", ".xml",
];
const DOCUMENTATION_EXTS: &[&str] = &[".md", ".txt", ".doc", ".docx", ".pdf"];
const SCRIPT_EXTS: &[&str] = &[".sh", ".bat", ".ps1", ".cmd"];
const SOURCE_EXTS: &[&str] = &[
    ".js", ".ts", ".py", ".java", ".cs", ".cpp", ".c", ".go", ".rb",
];
const DATABASE_EXTS: &[&str] = &[".sql", ".db", ".sqlite"];
const INFRASTRUCTURE_EXTS: &[&str] = &[".tf", ".tfvars"];

/// Map a relevant file to its category. Total and deterministic; rules are
/// evaluated top to bottom and the first match wins. Extension rules sit
/// above the name-contains rules, so `app.log.json` is configuration and
/// `docker-compose.yml` is configuration, not log or container.
pub fn categorize(extension: &str, file_name: &str) -> Category {
    let ext = extension.to_lowercase();
    let name = file_name.to_lowercase();

    if CONFIGURATION_EXTS.contains(&ext.as_str()) {
        return Category::Configuration;
    }
    if DOCUMENTATION_EXTS.contains(&ext.as_str()) {
        return Category::Documentation;
    }
    if SCRIPT_EXTS.contains(&ext.as_str()) {
        return Category::Script;
    }
    if SOURCE_EXTS.contains(&ext.as_str()) {
        return Category::SourceCode;
    }
    if ext == ".log" || name.contains("log") {
        return Category::Log;
    }
    if DATABASE_EXTS.contains(&ext.as_str()) {
        return Category::Database;
    }
    if name.contains("docker") {
        return Category::Container;
    }
    if INFRASTRUCTURE_EXTS.contains(&ext.as_str()) {
        return Category::Infrastructure;
    }

    Category::Other
}

#[cfg(test)]
#[path = "categorize_tests.rs"]
mod tests;
