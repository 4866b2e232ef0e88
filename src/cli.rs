use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Apply record operations to a JSON or CSV file and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "rusty-records", version, about)]
pub struct Cli {
    /// Input file: a JSON array of objects, or a CSV with a header row.
    pub input: PathBuf,

    /// Print single-line JSON instead of pretty output.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Remove keys from every record.
    RemoveKeys {
        /// Keys to drop, comma separated or repeated.
        #[arg(long, short, value_delimiter = ',', num_args = 1..)]
        keys: Vec<String>,
    },
    /// Group records by the value of a field.
    GroupBy {
        #[arg(long, short)]
        field: String,
    },
    /// Deep-merge a partial JSON object onto every record.
    Merge {
        /// JSON file holding the partial object.
        #[arg(long, short)]
        patch: PathBuf,
    },
    /// Read a (possibly nested) field from every record.
    Get {
        /// Path segments, outermost first.
        #[arg(long = "key", short = 'k', required = true)]
        path: Vec<String>,
    },
    /// Report the key with the highest numeric value of every record.
    Highest,
    /// Derive a display name from every person or animal record.
    DisplayName,
}
