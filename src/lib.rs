//! # almanac-geo
//!
//! Location acquisition and timezone resolution for a sun and moon almanac.
//!
//! This library exists to enable testing of the concurrency core and provide
//! clean separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Value types**: `geo` with validated angles and coordinates
//! - **Timezones**: `timezone` maps a country and state to candidate zones
//! - **Geocoding**: `geocoder` turns a coordinate into a named location
//! - **Acquisition**: `locater` races positioning providers against a watchdog
//!   and delivers exactly one outcome per session
//! - **Configuration**: `config` for TOML-based preferences
//! - **Commands**: `commands` and `args` for the CLI
//! - **Infrastructure**: signal handling, logging, and shared constants

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod common;

pub mod args;
pub mod commands;
pub mod config;
pub mod geo;
pub mod geocoder;
pub mod io;
pub mod locater;
pub mod timezone;

pub use geo::{Coordinate, Latitude, Longitude};
pub use geocoder::{LocationResult, ReverseGeocoder};
pub use locater::{LocationListener, LocationType, Locater};
pub use timezone::{TimezoneCandidate, TimezoneResolver};
