use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chatdigest", version, about = "Summarize chat history month by month with an LLM")]
pub struct Cli {
    /// Load this configuration file instead of config/default.toml + config/{ENV}.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Batch the message export and write one summary file per month
    Summarize,
    /// Reduce the month summary files into the digest
    Digest,
    /// Summarize, then digest
    Run,
}
