//! Cache scanning backend
//!
//! A cached repository lives under:
//! ```text
//! <cache_root>/models--{namespace}--{repo_name}/snapshots/<revision>/...
//! ```
//! Only the top-level repository directories are enumerated; snapshot
//! revisions contribute to the size total but are not listed individually.

use std::fs;
use std::path::Path;

use crate::core::model::{bytes_to_mb, CacheRecord};
use crate::core::paths::normalize_path;
use crate::core::util::{folder_size_bytes, format_utc, last_access_time};

/// Convert `models--<namespace>--<repo_name>` into `<namespace>/<repo_name>`.
///
/// The name is split on at most the first two `--` occurrences, so a repo
/// name containing `--` survives intact in the final segment (a namespace
/// containing `--` is mis-split; upstream tooling never produces one).
/// Returns None for names that don't match the pattern.
pub fn parse_repo_id(folder_name: &str) -> Option<String> {
    let rest = folder_name.strip_prefix("models--")?;
    let (namespace, repo_name) = rest.split_once("--")?;
    Some(format!("{}/{}", namespace, repo_name))
}

/// Enumerate repository directories under `root` into CacheRecord values,
/// sorted by last access (newest first).
///
/// A non-existent root yields an empty list. Non-directories, names that
/// don't match the repository pattern, and entries whose metadata cannot be
/// read are skipped silently; this operation never fails.
pub fn scan_cache(root: &Path) -> Vec<CacheRecord> {
    let mut records = Vec::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return records,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let repo_id = match name.to_str().and_then(parse_repo_id) {
            Some(id) => id,
            None => continue,
        };

        let accessed = match last_access_time(&path) {
            Ok(time) => time,
            Err(_) => continue,
        };

        records.push(CacheRecord {
            repo_id,
            path: normalize_path(&path),
            size_mb: bytes_to_mb(folder_size_bytes(&path)),
            last_access: format_utc(accessed),
        });
    }

    // Fixed-width timestamps sort lexicographically in chronological order;
    // the stable sort preserves enumeration order on ties.
    records.sort_by(|a, b| b.last_access.cmp(&a.last_access));
    records
}
