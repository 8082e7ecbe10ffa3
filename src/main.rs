//! llm-scan - Local LLM cache utilities
//!
//! llm-scan provides:
//! - Discovery of locally cached Hugging Face model repositories
//! - Per-repository size and recency metadata
//! - A persisted JSON index (index.json) for downstream tooling

use clap::Parser;

mod cli;
mod core;
mod discovery;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = cli::run(cli) {
        eprintln!("[scan-cache] error: {err:#}");
        std::process::exit(1);
    }
}
