//! Path normalization utilities
//!
//! Ensures emitted paths use '/' as separator and that configured paths are
//! resolved to absolute form without touching the filesystem.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Anything else (including `~user` forms) is returned unchanged.
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> PathBuf {
    if raw == "~" {
        if let Some(home) = home {
            return home.to_path_buf();
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = home {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Resolve a path to absolute form lexically, against the current working
/// directory. No filesystem access; the path need not exist.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
