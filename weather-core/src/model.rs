use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one location, narrowed to what the screen shows.
///
/// Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location_name: String,
    pub temperature_c: f64,
    pub description: String,
    /// Provider icon code, e.g. `01d`.
    pub icon: String,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
    pub observed_at: Option<DateTime<Utc>>,
}
