use inquire::{
    CustomUserError,
    autocompletion::{Autocomplete, Replacement},
};
use weather_core::CityCatalog;

/// Suggests catalog cities matching what has been typed so far.
#[derive(Debug, Clone)]
pub struct CatalogAutocomplete {
    catalog: CityCatalog,
}

impl CatalogAutocomplete {
    pub fn new(catalog: CityCatalog) -> Self {
        Self { catalog }
    }
}

impl Autocomplete for CatalogAutocomplete {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(self.catalog.suggestions(input))
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        // Tab completes to the highlighted entry, else the first match.
        Ok(highlighted_suggestion.or_else(|| self.catalog.suggestions(input).into_iter().next()))
    }
}
