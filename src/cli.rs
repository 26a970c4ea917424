use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compose Java launch arguments for classpath and module-path runs.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the argument vector described by a JSON launch config.
    Compose {
        /// Path to the launch config (JSON).
        config: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },
    /// Split a raw option string the way launch options are split.
    Tokenize {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One argument per line.
    Lines,
    /// A single command line prefixed by the executable.
    Shell,
    /// A JSON array of arguments.
    Json,
}
