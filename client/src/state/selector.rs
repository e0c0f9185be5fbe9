//! Country-code dropdown state.
//!
//! DESIGN
//! ======
//! A plain reducer over `is_open`, `search_term` and the selected code. The
//! `CountryCodeSelector` component holds it in an `RwSignal` and renders from
//! the derived accessors, so the dropdown rules are testable without a DOM.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use super::dial_codes::{self, DEFAULT_DIAL_CODE, DialCode};

/// Placeholder shown when the search text matches no country.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Trigger text when the selected code is not in the table.
pub const UNSELECTED_TEXT: &str = "Select country code";

/// Transient state of one `CountryCodeSelector` instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorState {
    pub is_open: bool,
    pub search_term: String,
    pub selected: &'static str,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self { is_open: false, search_term: String::new(), selected: DEFAULT_DIAL_CODE }
    }
}

impl SelectorState {
    /// Open the panel if closed, close it if open.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Replace the search text; the visible list follows on next read.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Entries matching the current search text.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static DialCode> {
        dial_codes::filter_by_name(&self.search_term)
    }

    /// True when the panel should render the "no results" placeholder.
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        self.visible().is_empty()
    }

    /// Pick `entry`: select its code, clear the search, close the panel.
    ///
    /// Returns the chosen code so the caller can forward it to the parent.
    pub fn select(&mut self, entry: &'static DialCode) -> &'static str {
        self.selected = entry.code;
        self.search_term.clear();
        self.is_open = false;
        entry.code
    }

    /// Trigger text, e.g. `"USA (+1)"`.
    ///
    /// The country name comes from the first table entry with the selected
    /// code, so picking Canada displays `"USA (+1)"`.
    #[must_use]
    pub fn trigger_label(&self) -> String {
        dial_codes::find_by_code(self.selected)
            .map_or_else(|| UNSELECTED_TEXT.to_owned(), DialCode::label)
    }

    /// Whether `entry` should be highlighted as the current selection.
    #[must_use]
    pub fn is_selected(&self, entry: &DialCode) -> bool {
        entry.code == self.selected
    }
}
