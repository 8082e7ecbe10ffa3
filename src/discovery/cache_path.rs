//! Hugging Face cache root resolution
//!
//! Resolution is a pure function over an explicit environment snapshot so it
//! can be tested without mutating the real process environment. No filesystem
//! access happens here; the resolved directory need not exist yet.

use std::env;
use std::path::PathBuf;

use crate::core::paths::{absolutize, expand_tilde};

/// Environment signals consulted when resolving cache directories.
#[derive(Debug, Clone, Default)]
pub struct CacheEnv {
    /// `HUGGINGFACE_HUB_CACHE` - explicit cache root override
    pub hub_cache: Option<String>,

    /// `HF_HOME` - Hugging Face home root
    pub hf_home: Option<String>,

    /// User home directory
    pub home: Option<PathBuf>,
}

impl CacheEnv {
    /// Snapshot the real process environment. Empty values count as unset.
    pub fn from_process() -> Self {
        Self {
            hub_cache: env::var("HUGGINGFACE_HUB_CACHE")
                .ok()
                .filter(|value| !value.is_empty()),
            hf_home: env::var("HF_HOME").ok().filter(|value| !value.is_empty()),
            home: env::var_os("HOME").map(PathBuf::from),
        }
    }
}

// Fallback when no home directory can be determined; resolution must always
// produce a path.
fn home_or_tmp(env: &CacheEnv) -> PathBuf {
    env.home.clone().unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Resolve the Hugging Face cache root.
///
/// Order of precedence:
/// 1. `HUGGINGFACE_HUB_CACHE` (used verbatim)
/// 2. `HF_HOME/huggingface/hub`
/// 3. `~/.cache/huggingface/hub`
pub fn hf_cache_path(env: &CacheEnv) -> PathBuf {
    if let Some(hub_cache) = &env.hub_cache {
        return absolutize(&expand_tilde(hub_cache, env.home.as_deref()));
    }

    if let Some(hf_home) = &env.hf_home {
        return absolutize(&expand_tilde(hf_home, env.home.as_deref()))
            .join("huggingface")
            .join("hub");
    }

    home_or_tmp(env).join(".cache").join("huggingface").join("hub")
}

/// Default directory for llm-scan's own local cache (`~/.cache/llm_loader`).
///
/// Reserved for future local-cache features; distinct from the Hugging Face
/// hub root and never used by the scanner.
pub fn loader_cache_dir(env: &CacheEnv) -> PathBuf {
    home_or_tmp(env).join(".cache").join("llm_loader")
}
