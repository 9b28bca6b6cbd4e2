use clap::{Parser, Subcommand};

/// CLI arguments for locsuggest
#[derive(Debug, Parser)]
#[command(
    name = "locsuggest",
    version,
    about = "Search and inspect the locsuggest location index, locally or against a geo API"
)]
pub struct CliArgs {
    /// Path to a custom dataset (.json or .json.gz); default: bundled dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Base URL of a remote geo API (e.g. https://example.com); overrides --input
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search locations by free text
    Search {
        /// Query text (case- and accent-insensitive)
        query: String,

        /// Maximum number of results
        #[arg(short = 'l', long = "limit", default_value_t = 8)]
        limit: usize,
    },

    /// List the curated popular locations
    Popular {
        /// Maximum number of results
        #[arg(short = 'l', long = "limit", default_value_t = 10)]
        limit: usize,
    },

    /// Show a summary of the local index contents
    Stats,
}
