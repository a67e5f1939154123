//! Main application entry point.
//!
//! Parses the command line and dispatches to the command handlers in the
//! library:
//!
//! - `args`: command-line argument parsing and help/version display
//! - `commands`: coords, zones, locate and help
//! - `config`: preferences loading and validation, applied per command
//!
//! Errors from a command are logged in the usual block style and turn into a
//! non-zero exit status.

use almanac_geo::args::{self, CliAction, ParsedArgs};
use almanac_geo::commands;
use almanac_geo::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use almanac_geo::{log_end, log_error, log_pipe};
use anyhow::Result;

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp | CliAction::ShowHelpDueToError => {
            args::display_help();
            Ok(())
        }
        CliAction::HelpCommand { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::CoordsCommand {
            debug_enabled,
            input,
        } => commands::coords::handle_coords_command(&input, debug_enabled),
        CliAction::ZonesCommand {
            debug_enabled,
            config_dir,
            query,
            json,
        } => {
            let config = commands::load_config(config_dir, debug_enabled && !json)?;
            commands::zones::handle_zones_command(&config, &query, json, debug_enabled)
        }
        CliAction::LocateCommand {
            debug_enabled,
            config_dir,
            allow_last_known,
            json,
        } => {
            let config = commands::load_config(config_dir, debug_enabled && !json)?;
            commands::locate::handle_locate_command(config, allow_last_known, json, debug_enabled)
        }
    }
}

fn main() {
    let parsed_args = ParsedArgs::from_env();
    let usage_error = parsed_args.action == CliAction::ShowHelpDueToError;

    let code = match run(parsed_args.action) {
        Ok(()) if usage_error => EXIT_FAILURE,
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log_pipe!();
            log_error!("{:#}", e);
            log_end!();
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}
