//! Command dispatch

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::session::Session;
use crate::config::{global_config_path, Settings};
use crate::domain::TeamTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if cli.no_color || !settings.color {
        colored::control::set_override(false);
    }
    debug!("settings: {:?}", settings);

    match &cli.command {
        None => run_session(&settings, None),
        Some(Commands::Run { lead }) => run_session(&settings, lead.as_deref()),
        Some(Commands::Config { command }) => execute_config(cli, &settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

#[instrument(level = "debug", skip(settings))]
fn run_session(settings: &Settings, lead: Option<&str>) -> CliResult<()> {
    let tree = preset_tree(lead)?;
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), settings).with_tree(tree);
    session.run()?;
    debug!("session ended with {} employees", session.tree().len());
    Ok(())
}

/// Starting hierarchy for `run`; a rejected `--lead` is a usage error.
fn preset_tree(lead: Option<&str>) -> CliResult<TeamTree> {
    let mut tree = TeamTree::new();
    if let Some(name) = lead {
        tree.set_root(name)
            .map_err(|e| CliError::InvalidArgs(format!("--lead: {e}")))?;
    }
    Ok(tree)
}

fn execute_config(cli: &Cli, settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    let mut out = io::stdout();
    match command {
        ConfigCommands::Show => {
            let toml = settings.to_toml()?;
            write!(out, "{}", toml).with_context("write output")?;
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            output::info(&mut out, &format!("global: {}", global)).with_context("write output")?;
            if let Some(path) = &cli.config {
                output::info(&mut out, &format!("explicit: {}", path.display()))
                    .with_context("write output")?;
            }
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "cannot determine config directory".to_string(),
            })?;
            Settings::write_template(&path, *force)?;
            output::success(&mut out, &format!("created {}", path.display()))
                .with_context("write output")?;
        }
    }
    Ok(())
}
