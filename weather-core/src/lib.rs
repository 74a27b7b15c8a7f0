//! Core library for the `weather` screen.
//!
//! This crate defines:
//! - The city catalog and its prefix suggestion filter
//! - Configuration & credentials handling
//! - The OpenWeather fetcher behind the [`WeatherProvider`] abstraction
//! - The screen state machine and its render model
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod screen;
pub mod session;

pub use catalog::{CityCatalog, filter_suggestions};
pub use config::{Config, ProviderConfig};
pub use error::FetchError;
pub use model::WeatherRecord;
pub use provider::{WeatherProvider, provider_from_config};
pub use render::{RenderModel, render};
pub use screen::{Applied, FetchTicket, ScreenState, Status};
pub use session::WeatherScreen;
