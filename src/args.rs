//! Command-line argument parsing and processing.
//!
//! Global flags (`--debug`, `--config <dir>`, `--help`, `--version`) may appear
//! anywhere on the command line. The first positional argument selects the
//! command; the rest belong to it. Negative numbers such as `-37.81` are
//! positional values, not flags.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Parse a coordinate and print every formatted variant
    CoordsCommand { debug_enabled: bool, input: String },
    /// Print candidate timezones for a location
    ZonesCommand {
        debug_enabled: bool,
        config_dir: Option<String>,
        query: ZonesQuery,
        json: bool,
    },
    /// Acquire a location from the configured positioning source
    LocateCommand {
        debug_enabled: bool,
        config_dir: Option<String>,
        allow_last_known: bool,
        json: bool,
    },
    /// Help for one command, or general help
    HelpCommand { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// What the `zones` command lists.
#[derive(Debug, PartialEq)]
pub enum ZonesQuery {
    /// Every zone in the catalogue
    All,
    /// Candidates for a location, with angles kept as typed
    At {
        latitude: String,
        longitude: String,
        country_code: Option<String>,
        state: Option<String>,
    },
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1 && arg.parse::<f64>().is_err()
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut config_dir: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();
        let mut command_flags: Vec<String> = Vec::new();
        let mut unknown_arg_found = false;

        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = &args_vec[idx];
            match arg.as_str() {
                "--debug" | "-d" => debug_enabled = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--config" | "-c" => {
                    match args_vec.get(idx + 1).filter(|value| !is_flag(value)) {
                        Some(dir) => {
                            config_dir = Some(dir.clone());
                            idx += 1;
                        }
                        None => {
                            log_warning!("Missing directory for --config. Usage: --config <dir>");
                            unknown_arg_found = true;
                        }
                    }
                }
                "--all" | "-a" | "--json" | "-j" | "--no-last-known" => {
                    command_flags.push(arg.clone())
                }
                _ if is_flag(arg) => {
                    log_warning!("Unknown argument: {}", arg);
                    unknown_arg_found = true;
                }
                _ => positionals.push(arg.clone()),
            }
            idx += 1;
        }

        // Version takes precedence over help, help over errors.
        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if unknown_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let Some((command, rest)) = positionals.split_first() else {
            if !command_flags.is_empty() {
                log_warning!("'{}' requires a command", command_flags[0]);
                return ParsedArgs {
                    action: CliAction::ShowHelpDueToError,
                };
            }
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        };

        let has_flag = |names: &[&str]| command_flags.iter().any(|f| names.contains(&f.as_str()));
        let reject_flags = |allowed: &[&str]| {
            command_flags
                .iter()
                .find(|f| !allowed.contains(&f.as_str()))
                .cloned()
        };

        let action = match command.as_str() {
            "coords" | "c" => {
                if let Some(flag) = reject_flags(&[]) {
                    log_warning!("'{}' is not an option of coords", flag);
                    CliAction::ShowHelpDueToError
                } else if rest.is_empty() {
                    log_warning!("Missing coordinate. Usage: almanac-geo coords <coordinate>");
                    CliAction::ShowHelpDueToError
                } else {
                    CliAction::CoordsCommand {
                        debug_enabled,
                        input: rest.join(" "),
                    }
                }
            }
            "zones" | "z" => {
                if let Some(flag) = reject_flags(&["--all", "-a", "--json", "-j"]) {
                    log_warning!("'{}' is not an option of zones", flag);
                    CliAction::ShowHelpDueToError
                } else {
                    let query = if has_flag(&["--all", "-a"]) {
                        if rest.is_empty() {
                            Some(ZonesQuery::All)
                        } else {
                            log_warning!("zones --all takes no location arguments");
                            None
                        }
                    } else {
                        match rest {
                            [latitude, longitude, extra @ ..] if extra.len() <= 2 => {
                                Some(ZonesQuery::At {
                                    latitude: latitude.clone(),
                                    longitude: longitude.clone(),
                                    country_code: extra.first().cloned(),
                                    state: extra.get(1).cloned(),
                                })
                            }
                            _ => {
                                log_warning!(
                                    "Usage: almanac-geo zones <latitude> <longitude> [country] [state]"
                                );
                                None
                            }
                        }
                    };

                    match query {
                        Some(query) => CliAction::ZonesCommand {
                            debug_enabled,
                            config_dir,
                            query,
                            json: has_flag(&["--json", "-j"]),
                        },
                        None => CliAction::ShowHelpDueToError,
                    }
                }
            }
            "locate" | "l" => {
                if let Some(flag) = reject_flags(&["--no-last-known", "--json", "-j"]) {
                    log_warning!("'{}' is not an option of locate", flag);
                    CliAction::ShowHelpDueToError
                } else if let Some(extra) = rest.first() {
                    log_warning!("Unexpected argument for locate: {}", extra);
                    CliAction::ShowHelpDueToError
                } else {
                    CliAction::LocateCommand {
                        debug_enabled,
                        config_dir,
                        allow_last_known: !has_flag(&["--no-last-known"]),
                        json: has_flag(&["--json", "-j"]),
                    }
                }
            }
            "help" | "h" => CliAction::HelpCommand {
                command: rest.first().cloned(),
            },
            unknown => {
                log_warning!("Unknown command: {}", unknown);
                CliAction::ShowHelpDueToError
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::common::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("almanac-geo [OPTIONS] <COMMAND>");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("coords, c <coordinate>            Parse and format a coordinate");
    log_indented!("zones, z <lat> <lon> [cc] [state] List candidate timezones");
    log_indented!("zones, z --all                    List every known timezone");
    log_indented!("locate, l [--no-last-known]       Acquire the configured location");
    log_indented!("help, h [COMMAND]                 Show detailed help for a command");
    log_end!();
}
