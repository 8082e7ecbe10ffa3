//! Discovery of locally cached model repositories:
//! - cache_path: resolve the Hugging Face cache root
//! - scan: enumerate repository directories into CacheRecord values
//! - index: persist the scan result as index.json

pub mod cache_path;
pub mod index;
pub mod scan;
