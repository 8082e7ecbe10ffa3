//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// llm-scan - local LLM cache utilities.
#[derive(Parser, Debug)]
#[command(name = "llm-scan")]
#[command(
    author,
    version,
    about,
    long_about = r#"llm-scan inventories large model artifacts already cached on this machine.

It never downloads, hashes, or mutates model content: the scanned tree is
read-only except for the emitted index file.

Examples:
    llm-scan scan-cache
    llm-scan scan-cache --cache-root /data/hf-cache
    llm-scan scan-cache --output /tmp/index.json
"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the Hugging Face cache and emit index.json.
    #[command(
        name = "scan-cache",
        long_about = "Scan the Hugging Face cache root for models--<namespace>--<repo_name>\n\
directories and emit one record per repository with its id, absolute path,\n\
total size in MiB, and last-access timestamp (newest first).\n\n\
The record list is printed to stdout as pretty JSON and also written to the\n\
index file (default: <cache-root>/index.json).\n\n\
Examples:\n\
  llm-scan scan-cache\n\
  llm-scan scan-cache --cache-root /data/hf-cache --output /tmp/index.json\n"
    )]
    ScanCache {
        /// Override the Hugging Face cache root.
        #[arg(
            long,
            value_name = "PATH",
            long_help = "Override the Hugging Face cache root for this invocation.\n\n\
If omitted, the root is resolved from HUGGINGFACE_HUB_CACHE, then HF_HOME,\n\
then ~/.cache/huggingface/hub."
        )]
        cache_root: Option<PathBuf>,

        /// Path for index.json (defaults to <cache-root>/index.json).
        #[arg(
            long,
            value_name = "FILE",
            long_help = "Destination for the JSON index for this invocation.\n\n\
If omitted, the index is written to <cache-root>/index.json. Parent\n\
directories are created as needed; prior content is replaced."
        )]
        output: Option<PathBuf>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ScanCache { cache_root, output } => {
            crate::discovery::index::run_scan_cache(cache_root.as_deref(), output.as_deref())
        }
    }
}
