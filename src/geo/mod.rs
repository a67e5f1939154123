//! Geographic angle and coordinate model.
//!
//! This module provides the value types every other component passes around:
//!
//! ## Module Structure
//!
//! - [`angle`]: [`Angle`] parameterized by a [`Hemisphere`] policy, with the
//!   [`Latitude`] and [`Longitude`] aliases, formatting and rounding rules
//! - [`coordinate`]: [`Coordinate`] pairs and the persisted
//!   `DDMMSS[N|S] DDDMMSS[E|W]` form
//! - [`parse`]: standard, colon and fixed-width arc parsing
//! - [`error`]: [`AngleError`] validation failures
//!
//! ## Key Properties
//!
//! - Values are immutable after construction; every constructor validates
//! - Decimal input is decomposed by flooring into degrees, minutes and seconds
//! - Display rounding only ever affects the least significant displayed unit
//! - Equality compares the displayed seconds-accuracy arc, not the raw double

pub mod angle;
pub mod coordinate;
pub mod error;
mod parse;

pub use angle::{
    Accuracy, Angle, EastWest, Hemisphere, Latitude, Longitude, NorthSouth, Plain, Punctuation,
    Sign,
};
pub use coordinate::Coordinate;
pub use error::AngleError;

#[cfg(test)]
mod tests;
