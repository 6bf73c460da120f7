//! Command-line interface for the `storj-addon` binary

pub mod output;
pub mod types;

pub use types::{Cli, LogFormatArg};

use anyhow::{Context, Result};

use crate::application::startup;
use crate::domain::ports::ProcessEnv;
use crate::infrastructure::config::{load_manifest, ConfigLoader};
use output::{output, SettingsOutput};

/// Resolve, validate and print the settings for this process
pub fn execute(cli: &Cli) -> Result<()> {
    let manifest =
        load_manifest(cli.manifest.as_deref()).context("Failed to load addon manifest")?;

    let mut loader = ConfigLoader::new(manifest);
    if let Some(ref path) = cli.config {
        loader = loader.with_overrides_file(path);
    }

    let startup = startup::run(&loader, &ProcessEnv, cli.effective_log_format())?;
    output(&SettingsOutput::new(&startup.settings), cli.json)
        .context("Failed to write settings to stdout")?;
    Ok(())
}

/// Report a startup failure and terminate the process
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
