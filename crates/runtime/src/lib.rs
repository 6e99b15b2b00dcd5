mod config;
pub mod history;
pub mod logging;

pub use config::{
    DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_EXTENSIONS, DEFAULT_MAX_DEPTH, PROGRAM_LOG_LEVEL,
    PROGRAM_NAME, SPECIAL_FILE_MARKERS,
};

pub use logging::init;
