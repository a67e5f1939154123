//! Implementation of the coords command.
//!
//! Parses a coordinate in any accepted notation and prints it in every
//! accuracy and punctuation combination.

use anyhow::{Context, Result};

use crate::geo::{Accuracy, Coordinate, Punctuation};

static ACCURACIES: [(Accuracy, &str); 3] = [
    (Accuracy::Degrees, "degrees"),
    (Accuracy::Minutes, "minutes"),
    (Accuracy::Seconds, "seconds"),
];

static PUNCTUATIONS: [(Punctuation, &str); 3] = [
    (Punctuation::Standard, "standard"),
    (Punctuation::Colon, "colon"),
    (Punctuation::None, "none"),
];

/// Every `(label, formatted)` variant of `coordinate`.
pub fn formatted_variants(coordinate: &Coordinate) -> Vec<(String, String)> {
    ACCURACIES
        .iter()
        .flat_map(|&(accuracy, accuracy_name)| {
            PUNCTUATIONS.iter().map(move |&(punctuation, punctuation_name)| {
                (
                    format!("{accuracy_name}/{punctuation_name}"),
                    coordinate.to_formatted(accuracy, punctuation),
                )
            })
        })
        .collect()
}

/// Handle the coords command from the CLI.
pub fn handle_coords_command(input: &str, debug_enabled: bool) -> Result<()> {
    let coordinate =
        Coordinate::parse(input).with_context(|| format!("Invalid coordinate '{input}'"))?;

    log_version!();
    log_block_start!("Coordinate: {}", coordinate);
    log_indented!(
        "Decimal: {:.6}, {:.6}",
        coordinate.latitude().value(),
        coordinate.longitude().value()
    );
    log_indented!("Abbreviated: {}", coordinate.to_abbreviated());

    log_block_start!("Formats:");
    for (label, text) in formatted_variants(&coordinate) {
        log_indented!("{label:<18} {text}");
    }

    if debug_enabled {
        let (lat, lon) = (coordinate.latitude(), coordinate.longitude());
        log_pipe!();
        log_debug!(
            "Arc fields: {}° {}′ {}″ {:?} / {}° {}′ {}″ {:?}",
            lat.degrees(),
            lat.minutes(),
            lat.seconds(),
            lat.sign(),
            lon.degrees(),
            lon.minutes(),
            lon.seconds(),
            lon.sign()
        );
    }
    log_end!();
    Ok(())
}

/// Display detailed help for the coords command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("coords - Parse and format a coordinate");
    log_block_start!("Usage: almanac-geo coords <coordinate>");
    log_block_start!("Accepted notations:");
    log_indented!("51°30′26″N 000°07′39″W    standard punctuation");
    log_indented!("51:30:26N, 000:07:39W     colons, optional comma");
    log_indented!("513026N 0000739W          fixed width (abbreviated form)");
    log_block_start!("Examples:");
    log_indented!("almanac-geo coords 513026N 0000739W");
    log_indented!("almanac-geo coords \"37°48′49″S, 144°57′47″E\"");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_variants_cover_every_combination() {
        let coordinate = Coordinate::new(51.5073, -0.1276).unwrap();
        let variants = formatted_variants(&coordinate);

        assert_eq!(variants.len(), 9);
        assert!(variants.contains(&(
            "seconds/standard".to_string(),
            "51°30′26″N 000°07′39″W".to_string()
        )));
        assert!(variants.contains(&(
            "seconds/none".to_string(),
            "513026N 0000739W".to_string()
        )));
    }

    #[test]
    fn test_invalid_coordinate_is_reported() {
        let error = handle_coords_command("not a place", false).unwrap_err();
        assert!(format!("{error}").contains("not a place"));
    }
}
