use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

use crate::{FetchError, WeatherRecord};

use super::WeatherProvider;

/// Unit system requested from the provider; the record is always metric.
const UNITS: &str = "metric";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn current_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let url = self.current_url();
        debug!(%url, city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("units", UNITS), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries `appid`; keep it out of messages and logs.
                let e = e.without_url();
                warn!(city, error = %e, "OpenWeather request failed");
                FetchError::Transport(e.to_string())
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| {
                FetchError::Transport(format!("failed to read response body: {}", e.without_url()))
            })?;

        if !status.is_success() {
            let err = status_error(status, city, &body);
            warn!(city, %status, "OpenWeather returned an error status");
            return Err(err);
        }

        parse_current(&body).inspect_err(|e| warn!(city, error = %e, "unusable OpenWeather payload"))
    }
}

/// Map a non-2xx response onto the failure taxonomy.
pub(crate) fn status_error(status: StatusCode, city: &str, body: &str) -> FetchError {
    match status {
        StatusCode::NOT_FOUND => FetchError::CityNotFound(city.to_string()),
        StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
        _ => FetchError::Status { status: status.as_u16(), body: truncate_body(body) },
    }
}

/// Validate a `/data/2.5/weather` body and narrow it to a [`WeatherRecord`].
pub fn parse_current(body: &str) -> Result<WeatherRecord, FetchError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Malformed("response has no weather conditions".to_string()))?;

    Ok(WeatherRecord {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        description: condition.description,
        icon: condition.icon,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        pressure_hpa: parsed.main.pressure,
        observed_at: parsed.dt.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGER: &str = r#"{
        "name": "Alger",
        "main": { "temp": 21.4, "humidity": 60, "pressure": 1012 },
        "weather": [{ "description": "clear sky", "icon": "01d" }],
        "wind": { "speed": 3.1 }
    }"#;

    #[test]
    fn parses_consumed_fields() {
        let record = parse_current(ALGER).unwrap();
        assert_eq!(record.location_name, "Alger");
        assert_eq!(record.temperature_c, 21.4);
        assert_eq!(record.description, "clear sky");
        assert_eq!(record.icon, "01d");
        assert_eq!(record.humidity_pct, 60.0);
        assert_eq!(record.wind_speed_mps, 3.1);
        assert_eq!(record.pressure_hpa, 1012.0);
        assert_eq!(record.observed_at, None);
    }

    #[test]
    fn ignores_extra_fields_and_reads_observation_time() {
        let body = r#"{
            "coord": { "lon": 3.04, "lat": 36.75 },
            "name": "Oran",
            "dt": 1700000000,
            "main": { "temp": 18.0, "feels_like": 17.2, "humidity": 72, "pressure": 1018 },
            "weather": [
                { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04n" },
                { "id": 701, "main": "Mist", "description": "mist", "icon": "50n" }
            ],
            "wind": { "speed": 5.0, "deg": 250 }
        }"#;

        let record = parse_current(body).unwrap();
        assert_eq!(record.description, "broken clouds");
        assert_eq!(record.icon, "04n");
        assert_eq!(record.observed_at.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn empty_conditions_are_malformed() {
        let body = r#"{
            "name": "Alger",
            "main": { "temp": 21.4, "humidity": 60, "pressure": 1012 },
            "weather": [],
            "wind": { "speed": 3.1 }
        }"#;

        let err = parse_current(body).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let body = r#"{ "name": "Alger", "main": { "temp": 21.4 } }"#;
        assert!(matches!(parse_current(body), Err(FetchError::Malformed(_))));

        assert!(matches!(parse_current("not json"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn fractional_numbers_are_accepted() {
        let body = r#"{
            "name": "Setif",
            "main": { "temp": 9.8, "humidity": 81.5, "pressure": 1012.5 },
            "weather": [{ "description": "light rain", "icon": "10d" }],
            "wind": { "speed": 7 }
        }"#;

        let record = parse_current(body).unwrap();
        assert_eq!(record.humidity_pct, 81.5);
        assert_eq!(record.pressure_hpa, 1012.5);
        assert_eq!(record.wind_speed_mps, 7.0);
    }

    #[test]
    fn status_codes_map_to_failure_kinds() {
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "Atlantis", r#"{"cod":"404"}"#),
            FetchError::CityNotFound("Atlantis".into())
        );
        assert_eq!(status_error(StatusCode::UNAUTHORIZED, "Oran", ""), FetchError::Unauthorized);
        assert_eq!(
            status_error(StatusCode::BAD_GATEWAY, "Oran", "upstream"),
            FetchError::Status { status: 502, body: "upstream".into() }
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let provider = OpenWeatherProvider::with_base_url("SECRET".into(), "http://localhost:1/");
        let dbg = format!("{provider:?}");
        assert!(!dbg.contains("SECRET"));
        assert_eq!(provider.current_url(), "http://localhost:1/data/2.5/weather");
    }
}
