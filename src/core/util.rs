//! Filesystem size and timestamp helpers

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Sum the sizes of all files under `path`, recursively.
///
/// Any entry that disappears or becomes unreadable mid-walk contributes
/// nothing; the aggregate is never aborted by a single bad file.
pub fn folder_size_bytes(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Read a path's last-access time from filesystem metadata.
///
/// atime is an imperfect recency signal (noatime/relatime mounts may freeze
/// it), but it is the only signal available without external metadata.
pub fn last_access_time(path: &Path) -> std::io::Result<SystemTime> {
    std::fs::metadata(path)?.accessed()
}

/// Format a timestamp as UTC ISO-8601 with microsecond precision and a
/// literal 'Z' suffix (never '+00:00').
pub fn format_utc(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}
