//! Signed geographic angles with degree/minute/second decomposition.
//!
//! A single immutable value type, [`Angle`], is parameterized by a
//! [`Hemisphere`] policy that fixes the accepted range, the hemisphere letters
//! and the zero padding of the degree field:
//!
//! - [`Plain`]: a bearing-like angle normalized into `[0, 360)`
//! - [`NorthSouth`]: a latitude, magnitude at most 90°, letters `N`/`S`
//! - [`EastWest`]: a longitude, magnitude at most 180°, letters `E`/`W`
//!
//! Equality and hashing compare the displayed degree/minute/second triple and
//! the hemisphere, not the raw double. Two latitudes less than one arc-second
//! apart that floor to the same triple are equal (about 15 m at the equator).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use super::error::AngleError;
use super::parse::parse_arc;

const ARC_SECONDS_PER_DEGREE: u32 = 3600;
const FULL_TURN_ARC_SECONDS: u32 = 360 * ARC_SECONDS_PER_DEGREE;

// Absorbs binary representation error (10.2 * 3600 = 36719.99999999999)
// without moving any value that is genuinely below a whole arc-second.
const ARC_SECOND_EPSILON: f64 = 1e-6;

/// Range and display policy for an [`Angle`].
pub trait Hemisphere: Copy + fmt::Debug + Send + Sync + 'static {
    /// Name used in error messages.
    const NAME: &'static str;
    /// Largest accepted magnitude in degrees.
    const MAX_DEGREES: u32;
    /// Whether decimal input wraps around a full turn instead of being rejected.
    const WRAPS: bool;
    /// Letters for the positive and negative hemispheres.
    const LETTERS: Option<(char, char)>;
    /// Zero padding width of the degree field.
    const DEGREE_WIDTH: usize;
}

/// Unsigned angle in `[0, 360)`.
#[derive(Debug, Clone, Copy)]
pub struct Plain;

/// Latitude policy.
#[derive(Debug, Clone, Copy)]
pub struct NorthSouth;

/// Longitude policy.
#[derive(Debug, Clone, Copy)]
pub struct EastWest;

impl Hemisphere for Plain {
    const NAME: &'static str = "angle";
    const MAX_DEGREES: u32 = 359;
    const WRAPS: bool = true;
    const LETTERS: Option<(char, char)> = None;
    const DEGREE_WIDTH: usize = 3;
}

impl Hemisphere for NorthSouth {
    const NAME: &'static str = "latitude";
    const MAX_DEGREES: u32 = 90;
    const WRAPS: bool = false;
    const LETTERS: Option<(char, char)> = Some(('N', 'S'));
    const DEGREE_WIDTH: usize = 2;
}

impl Hemisphere for EastWest {
    const NAME: &'static str = "longitude";
    const MAX_DEGREES: u32 = 180;
    const WRAPS: bool = false;
    const LETTERS: Option<(char, char)> = Some(('E', 'W'));
    const DEGREE_WIDTH: usize = 3;
}

/// Sign of an angle: north/east are positive, south/west negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn factor(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Precision of a formatted angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Degrees,
    Minutes,
    Seconds,
}

/// Separators used when formatting an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// Fixed width digits: `0123456`.
    None,
    /// Degree, prime and double prime: `012°34′56″`.
    Standard,
    /// Colons: `012:34:56`.
    Colon,
}

/// An immutable angle with an exact value and its floored arc decomposition.
#[derive(Clone, Copy)]
pub struct Angle<K: Hemisphere = Plain> {
    degrees: u32,
    minutes: u32,
    seconds: u32,
    magnitude: f64,
    sign: Sign,
    kind: PhantomData<K>,
}

/// A latitude: magnitude at most 90°, hemisphere `N` or `S`.
pub type Latitude = Angle<NorthSouth>;

/// A longitude: magnitude at most 180°, hemisphere `E` or `W`.
pub type Longitude = Angle<EastWest>;

impl<K: Hemisphere> Angle<K> {
    /// Build an angle from decimal degrees.
    ///
    /// Plain angles are normalized into `[0, 360)`. Latitudes and longitudes
    /// reject magnitudes beyond their range and take the hemisphere from the
    /// sign of the input.
    pub fn from_degrees(value: f64) -> Result<Self, AngleError> {
        if !value.is_finite() {
            return Err(AngleError::NonFinite {
                kind: K::NAME,
                value,
            });
        }

        let (magnitude, sign) = if K::WRAPS {
            let wrapped = value.rem_euclid(360.0);
            // rem_euclid rounds tiny negative inputs up to exactly 360.0
            (if wrapped >= 360.0 { 0.0 } else { wrapped }, Sign::Positive)
        } else {
            let magnitude = value.abs();
            if magnitude > f64::from(K::MAX_DEGREES) {
                return Err(AngleError::OutOfRange {
                    kind: K::NAME,
                    value,
                    max: f64::from(K::MAX_DEGREES),
                });
            }
            let sign = if value < 0.0 {
                Sign::Negative
            } else {
                Sign::Positive
            };
            (magnitude, sign)
        };

        let mut total = (magnitude * f64::from(ARC_SECONDS_PER_DEGREE) + ARC_SECOND_EPSILON).floor()
            as u32;
        if K::WRAPS && total >= FULL_TURN_ARC_SECONDS {
            total -= FULL_TURN_ARC_SECONDS;
        }

        Ok(Self {
            degrees: total / ARC_SECONDS_PER_DEGREE,
            minutes: (total % ARC_SECONDS_PER_DEGREE) / 60,
            seconds: total % 60,
            magnitude,
            sign,
            kind: PhantomData,
        })
    }

    /// Build a positive angle from a degree/minute/second triple.
    pub fn from_dms(degrees: u32, minutes: u32, seconds: u32) -> Result<Self, AngleError> {
        Self::from_dms_signed(degrees, minutes, seconds, Sign::Positive)
    }

    /// Build an angle from a degree/minute/second triple and a hemisphere sign.
    ///
    /// A seconds value of 60 is accepted and carried into the minutes. The
    /// sign is ignored for policies without hemisphere letters.
    pub fn from_dms_signed(
        degrees: u32,
        mut minutes: u32,
        mut seconds: u32,
        sign: Sign,
    ) -> Result<Self, AngleError> {
        if seconds == 60 {
            seconds = 0;
            minutes += 1;
        }
        if seconds > 59 {
            return Err(AngleError::InvalidSeconds(seconds));
        }
        if minutes > 59 {
            return Err(AngleError::InvalidMinutes(minutes));
        }
        if degrees > K::MAX_DEGREES {
            return Err(AngleError::InvalidDegrees {
                kind: K::NAME,
                degrees,
                max: K::MAX_DEGREES,
            });
        }

        let magnitude =
            f64::from(degrees) + f64::from(minutes) / 60.0 + f64::from(seconds) / 3600.0;
        if !K::WRAPS && magnitude > f64::from(K::MAX_DEGREES) {
            return Err(AngleError::OutOfRange {
                kind: K::NAME,
                value: magnitude,
                max: f64::from(K::MAX_DEGREES),
            });
        }

        let sign = if K::LETTERS.is_some() {
            sign
        } else {
            Sign::Positive
        };

        Ok(Self {
            degrees,
            minutes,
            seconds,
            magnitude,
            sign,
            kind: PhantomData,
        })
    }

    /// Parse a formatted angle.
    ///
    /// Latitudes and longitudes require a trailing hemisphere letter
    /// (`N`/`S` or `E`/`W`, case-insensitive).
    pub fn parse(text: &str) -> Result<Self, AngleError> {
        let trimmed = text.trim();

        let Some((positive, negative)) = K::LETTERS else {
            let (d, m, s) = parse_arc(trimmed, K::NAME)?;
            return Self::from_dms(d, m, s);
        };

        let missing = || AngleError::MissingHemisphere {
            kind: K::NAME,
            text: text.to_string(),
            expected: format!("{positive}/{negative}"),
        };

        let letter = trimmed.chars().last().ok_or_else(missing)?;
        let sign = match letter.to_ascii_uppercase() {
            c if c == positive => Sign::Positive,
            c if c == negative => Sign::Negative,
            _ => return Err(missing()),
        };

        let arc = &trimmed[..trimmed.len() - letter.len_utf8()];
        let (d, m, s) = parse_arc(arc, K::NAME)?;
        Self::from_dms_signed(d, m, s, sign)
    }

    /// Whole degrees of the magnitude.
    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    /// Whole minutes remaining after the degrees.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Whole seconds remaining after the minutes.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// The exact unsigned value in degrees.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The exact signed value in degrees (south and west are negative).
    pub fn value(&self) -> f64 {
        self.magnitude * self.sign.factor()
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The hemisphere letter, if this policy has one.
    pub fn hemisphere(&self) -> Option<char> {
        K::LETTERS.map(|(positive, negative)| match self.sign {
            Sign::Positive => positive,
            Sign::Negative => negative,
        })
    }

    /// Degree/minute/second fields as displayed at the given accuracy.
    ///
    /// The first truncated unit rounds its parent up when it is 30 or more.
    fn display_fields(&self, accuracy: Accuracy) -> (u32, u32, u32) {
        let (mut d, m, s) = match accuracy {
            Accuracy::Seconds => (self.degrees, self.minutes, self.seconds),
            Accuracy::Minutes => {
                let mut d = self.degrees;
                let mut m = self.minutes + u32::from(self.seconds >= 30);
                if m == 60 {
                    m = 0;
                    d += 1;
                }
                (d, m, 0)
            }
            Accuracy::Degrees => (self.degrees + u32::from(self.minutes >= 30), 0, 0),
        };
        if K::WRAPS && d >= 360 {
            d -= 360;
        }
        (d, m, s)
    }

    /// Format the unsigned part of the angle, without hemisphere letter.
    pub fn format_arc(&self, accuracy: Accuracy, punctuation: Punctuation) -> String {
        let (d, m, s) = self.display_fields(accuracy);
        let width = K::DEGREE_WIDTH;

        let (deg_mark, min_mark, sec_mark) = match punctuation {
            Punctuation::None => ("", "", ""),
            Punctuation::Standard => ("°", "′", "″"),
            Punctuation::Colon => (":", ":", ""),
        };

        match accuracy {
            Accuracy::Degrees => match punctuation {
                Punctuation::Colon => format!("{d:0width$}"),
                _ => format!("{d:0width$}{deg_mark}"),
            },
            Accuracy::Minutes => match punctuation {
                Punctuation::Colon => format!("{d:0width$}{deg_mark}{m:02}"),
                _ => format!("{d:0width$}{deg_mark}{m:02}{min_mark}"),
            },
            Accuracy::Seconds => format!("{d:0width$}{deg_mark}{m:02}{min_mark}{s:02}{sec_mark}"),
        }
    }

    /// Format the angle followed by its hemisphere letter, if any.
    pub fn format(&self, accuracy: Accuracy, punctuation: Punctuation) -> String {
        let mut text = self.format_arc(accuracy, punctuation);
        if let Some(letter) = self.hemisphere() {
            text.push(letter);
        }
        text
    }

    /// Compact seconds-accuracy form used for persistence, e.g. `513026N`.
    pub fn to_abbreviated(&self) -> String {
        self.format(Accuracy::Seconds, Punctuation::None)
    }

    fn identity(&self) -> (u32, u32, u32, Sign) {
        (self.degrees, self.minutes, self.seconds, self.sign)
    }
}

impl<K: Hemisphere> PartialEq for Angle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl<K: Hemisphere> Eq for Angle<K> {}

impl<K: Hemisphere> Hash for Angle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl<K: Hemisphere> fmt::Debug for Angle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("arc", &self.to_abbreviated())
            .field("value", &self.value())
            .finish()
    }
}

impl<K: Hemisphere> fmt::Display for Angle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Accuracy::Seconds, Punctuation::Standard))
    }
}

impl<K: Hemisphere> FromStr for Angle<K> {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
