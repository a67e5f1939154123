//! Help command implementation for almanac-geo.
//!
//! Dispatches to command-specific help or shows the general command list.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("coords") | Some("c") => super::coords::display_help(),
        Some("zones") | Some("z") => super::zones::display_help(),
        Some("locate") | Some("l") => super::locate::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("coords, c <coordinate>   Parse and format a coordinate");
    log_indented!("zones, z <lat> <lon>     List candidate timezones for a location");
    log_indented!("locate, l                Acquire the configured location");
    log_indented!("help, h [COMMAND]        Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'almanac-geo help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'almanac-geo --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: almanac-geo help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("almanac-geo help zones");
    log_indented!("almanac-geo help locate");
    log_end!();
}
