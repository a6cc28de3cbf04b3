//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sumbox")]
#[command(author, version, about = "Inspect JSON documents as present-or-absent values", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON (the value, or null when absent)
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON values
    #[arg(long, global = true, env = "SUMBOX_PRETTY")]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Decode a document and report whether it holds a value
    Decode {
        #[command(flatten)]
        source: Source,
    },

    /// Look up a dotted path (e.g. servers.0.host) in a document
    Get {
        /// Dotted path to look up
        path: String,

        #[command(flatten)]
        source: Source,

        /// Only keep string values matching this regex
        #[arg(long, value_name = "REGEX")]
        matches: Option<String>,

        /// Value to use when the path is absent (JSON, or a plain string)
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,

        /// Abort with this message when the path is absent
        #[arg(long, value_name = "MSG", conflicts_with = "default")]
        expect: Option<String>,
    },
}

/// Where the JSON document comes from
#[derive(clap::Args)]
pub struct Source {
    /// JSON document text
    pub input: Option<String>,

    /// Read the JSON document from a file
    #[arg(long, conflicts_with = "input")]
    pub file: Option<PathBuf>,
}
