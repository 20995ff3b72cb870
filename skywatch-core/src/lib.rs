//! Core library for the `skywatch` weather lookup.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - Location query parsing and the OpenWeather provider
//! - The geolocation source
//! - Pure display formatting and the UI visibility state machine
//! - The request session (in-flight guard and orchestration)
//!
//! It is used by `skywatch-cli`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod model;
pub mod provider;
pub mod query;
pub mod session;
pub mod ui;

pub use config::Config;
pub use error::{EmptyQuery, GeoError, WeatherError};
pub use format::{DisplayFields, banner_text};
pub use geo::{Coordinates, IpLocator, LocationSource};
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, provider_from_config};
pub use query::LocationQuery;
pub use session::Session;
pub use ui::UiState;
