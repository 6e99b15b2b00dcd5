pub const PROGRAM_NAME: &str = "scour";
pub const PROGRAM_LOG_LEVEL: &str = "SCOUR_LOG_LEVEL";

/// Default depth bound for a scan. Depth 0 is the root itself.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Built-in IT-relevant extension allow-list.
/// All entries are lowercase and carry the leading dot; matching is
/// case-insensitive against the file's extension.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    // configuration
    ".conf",
    ".config",
    ".cfg",
    ".ini",
    ".yaml",
    ".yml",
    ".json",
    ".xml",
    ".env",
    ".toml",
    ".properties",
    // documentation
    ".md",
    ".txt",
    ".doc",
    ".docx",
    ".pdf",
    ".html",
    ".css",
    // scripts
    ".sh",
    ".bat",
    ".ps1",
    ".cmd",
    // source
    ".js",
    ".ts",
    ".py",
    ".java",
    ".cs",
    ".cpp",
    ".c",
    ".go",
    ".rb",
    ".rs",
    // logs
    ".log",
    // databases
    ".sql",
    ".db",
    ".sqlite",
    // infrastructure
    ".tf",
    ".tfvars",
    ".tfstate",
];

/// Entry-name substrings skipped on every scan unless the caller overrides
/// them. Matched case-insensitively against the base name of both files and
/// directories; a matching directory is not descended into.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "target",
    "__pycache__",
    ".next",
    "coverage",
    ".vscode",
    ".idea",
];

/// File names that are recorded regardless of extension.
/// All entries must be lowercase; matching is a case-insensitive
/// name-contains check.
pub const SPECIAL_FILE_MARKERS: &[&str] = &[
    "dockerfile",
    "makefile",
    "readme",
    "license",
    ".dockerignore",
    ".gitignore",
];
