//! Core library for the Skycast weather viewer.
//!
//! This crate defines:
//! - Configuration with embedded API defaults
//! - An HTTP fetcher for raw weather payloads
//! - Parsing of WeatherAPI.com JSON into domain types
//! - Rendering of those types into the displayed report
//! - The lookup controller consumed by the display surface
//!
//! It is used by `skycast-app`, but can also be reused by other frontends.

pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod report;

pub use config::Config;
pub use controller::{FETCH_FAILURE_MESSAGE, LookupHandler, Session, WeatherController};
pub use error::{FetchError, ParseError};
pub use fetch::WeatherFetcher;
pub use model::{AstroInfo, CurrentConditions, DaySummary, Forecast, ForecastDay, HourlyEntry};
