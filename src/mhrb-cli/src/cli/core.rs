//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mhrb")]
#[command(about = "Monster Hunter Rise Builder data pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write per-category database files
    #[command(visible_alias = "p")]
    Process {
        /// Path to the scraped data file
        #[arg(short, long, default_value = "downloaded_data.json")]
        input: PathBuf,

        /// Output directory for the weapons_<category>.json files
        #[arg(short, long, default_value = "data")]
        output: PathBuf,

        /// Only process one category (code, e.g. "huntinghorn")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Validate the scraped data against the tree specs without writing output
    #[command(visible_alias = "c")]
    Check {
        /// Path to the scraped data file
        #[arg(short, long, default_value = "downloaded_data.json")]
        input: PathBuf,

        /// Only check one category (code, e.g. "huntinghorn")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the transcribed weapon categories and their upgrade trees
    #[command(visible_alias = "s")]
    Spec {
        /// Show a single category's trees (code, e.g. "huntinghorn")
        category: Option<String>,
    },
}
