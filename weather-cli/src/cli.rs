use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::info;
use weather_core::{Config, RenderModel, WeatherScreen, provider_from_config};

use crate::{autocomplete::CatalogAutocomplete, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show current weather for a city once.
    Show {
        /// City name; the configured default city if absent.
        city: Option<String>,
    },

    /// Interactive weather screen with city suggestions.
    Screen,

    /// List catalog cities starting with a prefix.
    Suggest {
        prefix: String,
    },

    /// List all catalog cities.
    Cities,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config)?,
            Command::Show { city } => show(&config, city).await?,
            Command::Screen => screen(&config).await?,
            Command::Suggest { prefix } => {
                for city in config.cities.suggestions(&prefix) {
                    println!("{city}");
                }
            }
            Command::Cities => {
                for city in config.cities.iter() {
                    println!("{city}");
                }
            }
        }

        Ok(())
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .with_autocomplete(CatalogAutocomplete::new(config.cities.clone()))
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key.trim().to_string());
    if !default_city.trim().is_empty() {
        config.default_city = default_city.trim().to_string();
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn mount(config: &Config, city: &str) -> anyhow::Result<WeatherScreen> {
    let provider = provider_from_config(config)?;
    info!(city, "mounting weather screen");
    Ok(WeatherScreen::mount(
        provider,
        config.cities.clone(),
        city,
        &config.openweather.icon_base_url,
    ))
}

async fn show(config: &Config, city: Option<String>) -> anyhow::Result<()> {
    let city = city.unwrap_or_else(|| config.default_city.clone());
    let mut screen = mount(config, &city)?;

    screen.settle().await;
    println!("{}", show_outcome(screen.render())?);
    Ok(())
}

/// Text to print for a settled one-shot fetch.
///
/// Failures are returned as the error only, so `main` reports them once.
fn show_outcome(model: RenderModel) -> anyhow::Result<String> {
    match model {
        RenderModel::Error(view) => bail!("{}: {}\n{}", view.title, view.city, view.message),
        model => Ok(output::format_model(&model)),
    }
}

async fn screen(config: &Config) -> anyhow::Result<()> {
    let mut screen = mount(config, &config.default_city)?;

    loop {
        if screen.state().is_loading() {
            output::print_loading();
            screen.settle().await;
            output::print_model(&screen.render());
        }

        let input = Text::new("City:")
            .with_placeholder("Enter city name")
            .with_help_message("Tab to complete, Enter to search, Esc to quit")
            .with_autocomplete(CatalogAutocomplete::new(screen.catalog().clone()))
            .prompt_skippable()
            .context("Failed to read city")?;

        let Some(text) = input else {
            break;
        };

        screen.search(&text);
    }

    Ok(())
}
