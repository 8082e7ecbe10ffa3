//! Index builder - orchestrate a scan and persist its result
//!
//! The index file is the only artifact this crate writes; the scanned tree
//! itself is never mutated.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::model::CacheRecord;
use crate::core::paths::absolutize;
use crate::discovery::cache_path::{hf_cache_path, CacheEnv};
use crate::discovery::scan::scan_cache;

/// Default index file name under the cache root
pub const INDEX_FILE: &str = "index.json";

/// Scan the cache, write a pretty-printed JSON index, and return the records.
///
/// `cache_root` defaults to the resolved Hugging Face cache root;
/// `output_file` defaults to `<cache_root>/index.json`. Parent directories of
/// the output file are created as needed and prior content is replaced. I/O
/// failures on the output path propagate to the caller; the scan itself
/// never fails.
pub fn build_index(
    cache_root: Option<&Path>,
    output_file: Option<&Path>,
) -> Result<Vec<CacheRecord>> {
    let root = match cache_root {
        Some(path) => absolutize(path),
        None => hf_cache_path(&CacheEnv::from_process()),
    };

    let records = scan_cache(&root);

    let out_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => root.join(INDEX_FILE),
    };

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&out_path, json)
        .with_context(|| format!("Failed to write index file: {:?}", out_path))?;

    Ok(records)
}

/// Run the scan-cache command
pub fn run_scan_cache(cache_root: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let records = build_index(cache_root, output)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
