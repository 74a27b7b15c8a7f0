//! Pure mapping from [`ScreenState`] to display text.

use chrono::{DateTime, Utc};

use crate::{
    FetchError, WeatherRecord,
    screen::{ScreenState, Status},
};

pub const LOADING_TEXT: &str = "Loading Weather...";

#[derive(Debug, Clone, PartialEq)]
pub enum RenderModel {
    Loading,
    Weather(WeatherView),
    Error(ErrorView),
}

/// Display-ready strings for a loaded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherView {
    pub location: String,
    pub icon_url: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub observed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub city: String,
    pub title: String,
    pub message: String,
}

pub fn render(state: &ScreenState, icon_base_url: &str) -> RenderModel {
    match state.status() {
        Status::Loading => RenderModel::Loading,
        Status::Loaded(record) => RenderModel::Weather(weather_view(record, icon_base_url)),
        Status::Failed(err) => RenderModel::Error(error_view(state.current_city(), err)),
    }
}

pub fn weather_view(record: &WeatherRecord, icon_base_url: &str) -> WeatherView {
    WeatherView {
        location: record.location_name.clone(),
        icon_url: icon_url(icon_base_url, &record.icon),
        temperature: format!("{}°C", round_half_up(record.temperature_c)),
        description: capitalize_first(&record.description),
        humidity: format!("{}%", record.humidity_pct),
        wind: format!("{} m/s", record.wind_speed_mps),
        pressure: format!("{} hPa", record.pressure_hpa),
        observed_at: record.observed_at,
    }
}

fn error_view(city: &str, err: &FetchError) -> ErrorView {
    ErrorView { city: city.to_string(), title: err.title().to_string(), message: err.to_string() }
}

pub fn icon_url(icon_base_url: &str, icon: &str) -> String {
    format!("{}/img/wn/{icon}@4x.png", icon_base_url.trim_end_matches('/'))
}

/// Nearest integer, with halves rounded towards positive infinity.
fn round_half_up(value: f64) -> i64 {
    // `value + 0.5` can itself round up, so compare the exact fraction.
    let floor = value.floor();
    if value - floor >= 0.5 { floor as i64 + 1 } else { floor as i64 }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
