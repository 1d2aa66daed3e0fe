// Centralized magic numbers & default values
pub const MAX_INVALID_EXAMPLES: usize = 5;
pub const DEFAULT_SPLIT_VALUE: i64 = 200;
pub const WORKER_THREAD_NAME: &str = "splitbox-worker";
pub const UNKNOWN_SPLIT_ERROR: &str = "Unknown split error";
pub const MANIFEST_FILENAME: &str = "manifest.json";
pub const ARCHIVE_PREFIX: &str = "splitbox-batches";
