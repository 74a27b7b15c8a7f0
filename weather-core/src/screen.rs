//! In-memory state of the weather screen.
//!
//! Every fetch is tagged with a request generation. Only the response whose
//! ticket carries the latest generation may change what is displayed; any
//! older response that arrives later is discarded.

use tracing::debug;

use crate::{CityCatalog, FetchError, WeatherRecord};

/// What the screen currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Loading,
    Loaded(WeatherRecord),
    Failed(FetchError),
}

/// Handle for one outstanding fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub city: String,
}

/// Outcome of handing a response back to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the latest request and is now displayed.
    Current,
    /// A newer request was issued meanwhile; the response was dropped.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    current_city: String,
    input_text: String,
    suggestions: Vec<String>,
    status: Status,
    generation: u64,
}

impl ScreenState {
    /// Fresh screen for `default_city`, loading and with no record yet.
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            current_city: default_city.into(),
            input_text: String::new(),
            suggestions: Vec::new(),
            status: Status::Loading,
            generation: 0,
        }
    }

    pub fn current_city(&self) -> &str {
        &self.current_city
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    pub fn weather(&self) -> Option<&WeatherRecord> {
        match &self.status {
            Status::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Start a fetch for the current city, superseding any in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = Status::Loading;
        FetchTicket { generation: self.generation, city: self.current_city.clone() }
    }

    pub fn set_city(&mut self, city: impl Into<String>) -> FetchTicket {
        self.current_city = city.into();
        self.begin_fetch()
    }

    /// Record typed text and recompute suggestions from `catalog`.
    pub fn input_changed(&mut self, text: &str, catalog: &CityCatalog) {
        self.input_text = text.to_string();
        self.suggestions = catalog.suggestions(text);
    }

    /// Copy the suggestion at `index` into the input and close the list.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        let chosen = self.suggestions.get(index)?.clone();
        self.input_text = chosen;
        self.suggestions.clear();
        Some(&self.input_text)
    }

    /// Make the typed text the current city. Blank input is ignored.
    pub fn submit(&mut self) -> Option<FetchTicket> {
        let city = self.input_text.trim();
        if city.is_empty() {
            return None;
        }
        let city = city.to_string();
        self.suggestions.clear();
        Some(self.set_city(city))
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<WeatherRecord, FetchError>,
    ) -> Applied {
        if ticket.generation != self.generation {
            debug!(
                city = %ticket.city,
                generation = ticket.generation,
                latest = self.generation,
                "dropping superseded weather response"
            );
            return Applied::Superseded;
        }

        self.status = match result {
            Ok(record) => Status::Loaded(record),
            Err(err) => Status::Failed(err),
        };
        Applied::Current
    }
}
