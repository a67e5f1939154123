//! Arc value parsing.
//!
//! Three textual shapes are accepted for the unsigned part of an angle:
//!
//! - standard punctuation: `12°34'56"` (also `′`, `″` and `''`)
//! - colon punctuation: `12:34:56`
//! - fixed width without punctuation: `123456`, `0123456`, `1234 56`
//!
//! Trailing components may be omitted and default to zero. Range checks are
//! left to the angle constructors so both construction paths share them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::AngleError;

static STANDARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([0-9]{1,3})\s*°(?:\s*([0-9]{1,2})\s*['′])?(?:\s*([0-9]{1,2})\s*(?:"|″|''))?$"#)
        .expect("standard arc pattern is valid")
});

static COLON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3})(?:\s*:\s*([0-9]{1,2}))?(?:\s*:\s*([0-9]{1,2}))?$")
        .expect("colon arc pattern is valid")
});

// Leftmost-first matching picks the longest degree field that still lets the
// minute and second fields be exactly two digits wide.
static FIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3})(?:\s*([0-9]{2}))?(?:\s*([0-9]{2}))?$")
        .expect("fixed-width arc pattern is valid")
});

/// Parse an arc value into its `(degrees, minutes, seconds)` fields.
pub(crate) fn parse_arc(text: &str, kind: &'static str) -> Result<(u32, u32, u32), AngleError> {
    let trimmed = text.trim();
    let pattern: &Regex = if trimmed.contains('°') {
        &STANDARD
    } else if trimmed.contains(':') {
        &COLON
    } else {
        &FIXED
    };

    let malformed = || AngleError::Malformed {
        kind,
        text: text.to_string(),
    };

    let captures = pattern.captures(trimmed).ok_or_else(malformed)?;
    let field = |index: usize| -> Result<u32, AngleError> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<u32>().map_err(|_| malformed()),
            None => Ok(0),
        }
    };

    Ok((field(1)?, field(2)?, field(3)?))
}
