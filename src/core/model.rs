//! Cache index data model
//!
//! Every scan produces a list of CacheRecord values; the same list is printed
//! to stdout and serialized into index.json.

use serde::{Deserialize, Serialize};

/// One discovered model repository.
///
/// Field order is significant: serde emits JSON keys in declaration order,
/// which fixes the on-disk index layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// `<namespace>/<repo_name>` derived from the directory name
    pub repo_id: String,

    /// Absolute path to the repository directory, '/' separators on every platform
    pub path: String,

    /// Total size of all contained files in MiB, rounded to two decimals
    pub size_mb: f64,

    /// Last-access time as UTC ISO-8601 with a literal 'Z' suffix
    pub last_access: String,
}

/// Convert a byte count to mebibytes (1 MiB = 1,048,576 bytes), rounded to
/// two decimal places.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    (bytes as f64 / 1_048_576.0 * 100.0).round() / 100.0
}
