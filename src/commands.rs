use std::path::Path;

use tracing::info;

use crate::cli::{Command, OutputFormat};
use crate::core::config::LaunchConfig;
use crate::core::error::LaunchResult;
use crate::core::launch::{tokenize, ArgumentVector};

pub fn dispatch(command: Command) -> LaunchResult<()> {
    match command {
        Command::Compose { config, format } => {
            if let Some(rendered) = compose_launch(&config, format)? {
                println!("{}", rendered);
            }
            Ok(())
        }
        Command::Tokenize { raw } => {
            for token in tokenize(&raw) {
                println!("{}", token);
            }
            Ok(())
        }
    }
}

/// Rendered arguments for the config at `config_path`, or `None` when the
/// config asks to be skipped.
fn compose_launch(config_path: &Path, format: OutputFormat) -> LaunchResult<Option<String>> {
    let config = LaunchConfig::load(config_path)?;

    if config.skip {
        info!("skipping execute as per configuration");
        return Ok(None);
    }

    let args = config.compose();
    info!("Composed {} arguments for {}", args.len(), config.executable);
    format_arguments(&args, &config.executable, format).map(Some)
}

fn format_arguments(
    args: &ArgumentVector,
    executable: &str,
    format: OutputFormat,
) -> LaunchResult<String> {
    let rendered = match format {
        OutputFormat::Lines => args.as_slice().join("\n"),
        OutputFormat::Shell => args.command_line(executable),
        OutputFormat::Json => serde_json::to_string_pretty(args)?,
    };
    Ok(rendered)
}
