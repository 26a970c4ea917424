mod cli;
mod commands;
pub mod core;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub use crate::core::config::LaunchConfig;
pub use crate::core::error::{LaunchError, LaunchResult};
pub use crate::core::launch::{
    compose, resolve_add_modules, resolve_path_mode, tokenize, ArgumentVector, ComposeInput,
    MainClass, PathMode, PathSelection,
};
pub use crate::core::module::{ModuleDescriptor, ModuleFilter, PathElement};

pub fn run() -> ExitCode {
    // Logs go to stderr; stdout carries the composed arguments.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,jfxlaunch_lib=debug")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("CLI args parsed: {:?}", cli);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{}", error);
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
