//! Core library for the simulated weather station.
//!
//! This crate defines:
//! - The station that holds the current measurements and broadcasts
//!   every change to its registered observers
//! - Simulated sensors and the factories that build them
//!
//! It is used by `weather-station-console`, but can also be reused by other
//! binaries.

pub mod sensor;
pub mod station;
