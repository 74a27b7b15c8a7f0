use chrono::Local;
use weather_core::render::{ErrorView, LOADING_TEXT, RenderModel, WeatherView};

pub fn print_loading() {
    println!("{LOADING_TEXT}");
}

pub fn print_model(model: &RenderModel) {
    println!("{}", format_model(model));
}

pub fn format_model(model: &RenderModel) -> String {
    match model {
        RenderModel::Loading => LOADING_TEXT.to_string(),
        RenderModel::Weather(view) => format_weather(view),
        RenderModel::Error(view) => format_error(view),
    }
}

fn format_weather(view: &WeatherView) -> String {
    let mut lines = vec![
        String::new(),
        format!("  {}", view.location),
        format!("  {}  {}", view.temperature, view.description),
        format!("  Humidity: {}   Wind: {}   Pressure: {}", view.humidity, view.wind, view.pressure),
        format!("  Icon: {}", view.icon_url),
    ];
    if let Some(at) = view.observed_at {
        lines.push(format!("  Updated {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M")));
    }
    lines.join("\n")
}

fn format_error(view: &ErrorView) -> String {
    format!("\n  {}: {}\n  {}", view.title, view.city, view.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_lines_show_every_detail() {
        let view = WeatherView {
            location: "Alger".into(),
            icon_url: "https://openweathermap.org/img/wn/01d@4x.png".into(),
            temperature: "21°C".into(),
            description: "Clear sky".into(),
            humidity: "60%".into(),
            wind: "3.1 m/s".into(),
            pressure: "1012 hPa".into(),
            observed_at: None,
        };

        let text = format_model(&RenderModel::Weather(view));
        assert!(text.contains("Alger"));
        assert!(text.contains("21°C  Clear sky"));
        assert!(text.contains("Humidity: 60%   Wind: 3.1 m/s   Pressure: 1012 hPa"));
        assert!(!text.contains("Updated"));
    }

    #[test]
    fn error_lines_show_title_and_city() {
        let view = ErrorView {
            city: "Atlantis".into(),
            title: "City not found".into(),
            message: "city 'Atlantis' was not found by the weather provider".into(),
        };
        let text = format_model(&RenderModel::Error(view));
        assert!(text.contains("City not found: Atlantis"));
    }

    #[test]
    fn loading_text() {
        assert_eq!(format_model(&RenderModel::Loading), "Loading Weather...");
    }
}
