//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{messages, ApplicationError, Directory, Placement, Shell};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Build {
            lead,
            placements,
            strict,
        }) => _build(load_settings(cli)?, lead, placements, *strict),
        Some(Commands::Shell) | None => _shell(load_settings(cli)?),
    }
}

/// Layered settings with the `--style` flag applied last.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(style) = cli.style {
        settings.style = style;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(settings))]
fn _shell(settings: Settings) -> CliResult<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(Directory::new(settings), stdin.lock(), io::stdout());
    shell.run()?;
    Ok(())
}

fn _build(settings: Settings, lead: &str, placements: &[String], strict: bool) -> CliResult<()> {
    let directory = build(settings, lead, placements, strict)?;
    output::structure("Current Team Structure:", &directory.structure());
    Ok(())
}

/// Build a team from a lead and `MANAGER:EMPLOYEE:SIDE` placements.
///
/// All placements are parsed before the tree is touched. Rejected placements
/// are reported and skipped, unless `strict` is set: then the first rejection
/// aborts the build.
#[instrument(skip(settings))]
pub fn build(
    settings: Settings,
    lead: &str,
    placements: &[String],
    strict: bool,
) -> CliResult<Directory> {
    let placements = placements
        .iter()
        .map(|spec| spec.parse::<Placement>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::InvalidArgs(e.to_string()))?;

    let mut directory = Directory::new(settings);
    let lead = directory.add_team_lead(lead)?;
    output::success(&messages::team_lead_added(&lead));

    for placement in &placements {
        match directory.place(placement) {
            Ok(side) => output::success(&messages::employee_added(
                &placement.employee,
                &placement.manager,
                side,
            )),
            Err(ApplicationError::Tree(e)) if !strict => {
                output::rejected(placement, &messages::rejection(&e))
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(directory)
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                output::info(&path.display());
                if !path.exists() {
                    output::warning("file does not exist, defaults apply");
                }
            }
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory (no home directory?)".into(),
                ))
            }
        },
    }
    Ok(())
}
