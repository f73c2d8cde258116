pub mod filter;
pub mod patterns;
pub mod reader;

pub use filter::{check_file, check_files};
pub use patterns::{PatternSet, SENSITIVE_PATTERNS};
pub use reader::{print_contents, read_file};

/// Files scanned when nothing else is configured, in processing order.
pub const DEFAULT_FILES: [&str; 2] = ["env.cloud", ".env.local"];
