use std::{collections::HashMap, sync::Arc};

use tokio::task::{Id, JoinSet};
use tracing::{debug, error};

use crate::{
    CityCatalog, FetchError, WeatherProvider, WeatherRecord,
    render::{RenderModel, render},
    screen::{Applied, FetchTicket, ScreenState},
};

/// Drives a [`ScreenState`] against a provider.
///
/// Each fetch runs on its own task, so several requests can be in flight; the
/// screen's generation check decides which response is shown. A task that
/// panics or is aborted resolves its ticket as a failure.
#[derive(Debug)]
pub struct WeatherScreen {
    state: ScreenState,
    catalog: CityCatalog,
    provider: Arc<dyn WeatherProvider>,
    icon_base_url: String,
    fetches: JoinSet<Result<WeatherRecord, FetchError>>,
    tickets: HashMap<Id, FetchTicket>,
}

impl WeatherScreen {
    /// Create the screen and start fetching `default_city`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(
        provider: Arc<dyn WeatherProvider>,
        catalog: CityCatalog,
        default_city: &str,
        icon_base_url: &str,
    ) -> Self {
        let mut screen = Self {
            state: ScreenState::new(default_city),
            catalog,
            provider,
            icon_base_url: icon_base_url.to_string(),
            fetches: JoinSet::new(),
            tickets: HashMap::new(),
        };
        let ticket = screen.state.begin_fetch();
        screen.spawn_fetch(ticket);
        screen
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    pub fn render(&self) -> RenderModel {
        render(&self.state, &self.icon_base_url)
    }

    pub fn type_text(&mut self, text: &str) {
        self.state.input_changed(text, &self.catalog);
    }

    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        self.state.select_suggestion(index)
    }

    /// Fetch the typed city. Returns `false` if the input was blank.
    pub fn submit(&mut self) -> bool {
        match self.state.submit() {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Type `text`, pick the catalog suggestion it names (ignoring case) and submit.
    pub fn search(&mut self, text: &str) -> bool {
        let text = text.trim();
        self.type_text(text);

        let wanted = text.to_lowercase();
        let exact = self.state.suggestions().iter().position(|s| s.to_lowercase() == wanted);
        if let Some(index) = exact {
            self.select_suggestion(index);
        }

        self.submit()
    }

    pub fn change_city(&mut self, city: &str) {
        let ticket = self.state.set_city(city);
        self.spawn_fetch(ticket);
    }

    /// Fetch the current city again.
    pub fn refresh(&mut self) {
        let ticket = self.state.begin_fetch();
        self.spawn_fetch(ticket);
    }

    /// Apply the next response to arrive, or `None` if nothing is in flight.
    pub async fn next_update(&mut self) -> Option<Applied> {
        let (id, result) = match self.fetches.join_next_with_id().await? {
            Ok((id, result)) => (id, result),
            Err(join_err) => {
                error!(error = %join_err, "weather fetch task did not complete");
                let reason = if join_err.is_panic() {
                    "weather fetch panicked"
                } else {
                    "weather fetch was cancelled"
                };
                (join_err.id(), Err(FetchError::Transport(reason.to_string())))
            }
        };

        let ticket = self.tickets.remove(&id)?;
        Some(self.state.complete_fetch(ticket, result))
    }

    /// Wait until the latest request has resolved.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            if self.next_update().await.is_none() {
                break;
            }
        }
    }

    fn spawn_fetch(&mut self, ticket: FetchTicket) {
        debug!(city = %ticket.city, generation = ticket.generation, "spawning weather fetch");

        let provider = Arc::clone(&self.provider);
        let city = ticket.city.clone();
        let handle = self.fetches.spawn(async move { provider.fetch_weather(&city).await });
        self.tickets.insert(handle.id(), ticket);
    }
}
