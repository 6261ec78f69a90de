//! Inline search bar on the Home page.
//!
//! The bar classifies its input on every keystroke. Tab overrides the
//! detected type by cycling through [`SearchType::next`]; any edit drops the
//! override again.

use crate::search::{ParsedSearch, SearchType, classify};

/// Maximum number of recent searches to remember.
pub const MAX_SEARCH_HISTORY: usize = 10;

// ============================================================================
// Search Bar
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    /// Current input text.
    pub input: String,
    /// Cursor position within the input (byte offset).
    pub cursor: usize,
    pub focused: bool,
    /// User override for the detected type (Tab cycles).
    pub type_override: Option<SearchType>,
    /// Whether a lookup is in flight.
    pub loading: bool,
    /// Recent queries, most recent first.
    pub history: Vec<String>,
    history_index: Option<usize>,
    saved_input: Option<String>,
}

impl SearchBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a persisted history.
    #[must_use]
    pub fn with_history(mut history: Vec<String>) -> Self {
        history.truncate(MAX_SEARCH_HISTORY);
        Self {
            history,
            ..Self::default()
        }
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor = self.input.len();
        self.reset_history_navigation();
    }

    pub fn unfocus(&mut self) {
        self.focused = false;
        self.cursor = 0;
        self.reset_history_navigation();
    }

    fn reset_history_navigation(&mut self) {
        self.history_index = None;
        self.saved_input = None;
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Inserts a character at the cursor.
    pub fn type_char(&mut self, c: char) {
        self.reset_history_navigation();
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.type_override = None;
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        self.reset_history_navigation();
        if self.cursor > 0 {
            let prev = self.input[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.input.remove(prev);
            self.cursor = prev;
        }
        self.type_override = None;
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.input[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor = self.input[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Replaces the input, placing the cursor at the end.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor = self.input.len();
        self.type_override = None;
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// The input classified, with the override applied.
    #[must_use]
    pub fn parsed(&self) -> ParsedSearch {
        let parsed = classify(&self.input);
        match self.type_override {
            Some(search_type) => parsed.with_type(search_type),
            None => parsed,
        }
    }

    /// Type the bar would search by, or `None` while the input is blank.
    #[must_use]
    pub fn effective_type(&self) -> Option<SearchType> {
        if self.input.trim().is_empty() {
            return self.type_override;
        }
        Some(self.parsed().search_type)
    }

    /// Tab: move to the type after the effective one.
    pub fn cycle_type(&mut self) {
        let next = self
            .effective_type()
            .map_or(SearchType::Uid, SearchType::next);
        self.type_override = Some(next);
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Records `query` as the most recent search.
    pub fn add_to_history(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.history.retain(|q| q != query);
        self.history.insert(0, query.to_string());
        self.history.truncate(MAX_SEARCH_HISTORY);
    }

    fn show_history_entry(&mut self, index: usize) {
        if let Some(query) = self.history.get(index) {
            self.history_index = Some(index);
            self.input = query.clone();
            self.cursor = self.input.len();
            self.type_override = None;
        }
    }

    /// Up arrow: step to an older query.
    pub fn history_prev(&mut self) {
        match self.history_index {
            None if !self.history.is_empty() => {
                self.saved_input = Some(self.input.clone());
                self.show_history_entry(0);
            }
            Some(idx) if idx + 1 < self.history.len() => self.show_history_entry(idx + 1),
            _ => {}
        }
    }

    /// Down arrow: step to a newer query, ending at the text being typed.
    pub fn history_next(&mut self) {
        match self.history_index {
            Some(0) => {
                self.history_index = None;
                if let Some(saved) = self.saved_input.take() {
                    self.set_input(saved);
                }
            }
            Some(idx) => self.show_history_entry(idx - 1),
            None => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn typed(text: &str) -> SearchBar {
        let mut bar = SearchBar::new();
        bar.focus();
        text.chars().for_each(|c| bar.type_char(c));
        bar
    }

    #[rstest]
    #[case::uid("132465789", SearchType::Uid)]
    #[case::phone("89991234567", SearchType::Phone)]
    #[case::card("1234 5678 9012 3456", SearchType::Card)]
    #[case::fio("Иванов", SearchType::Fio)]
    #[case::nickname("john smith", SearchType::Nickname)]
    #[case::link("https://www.bybit.com/profile/123", SearchType::ProfileUrl)]
    fn test_detection_on_keystroke(#[case] text: &str, #[case] expected: SearchType) {
        assert_eq!(typed(text).effective_type(), Some(expected));
    }

    #[test]
    fn test_blank_input_has_no_type() {
        assert_eq!(SearchBar::new().effective_type(), None);
        assert_eq!(typed("   ").effective_type(), None);
    }

    #[test]
    fn test_override_cycles_and_resets_on_edit() {
        let mut bar = typed("9991234567");
        assert_eq!(bar.effective_type(), Some(SearchType::Phone));

        bar.cycle_type();
        assert_eq!(bar.effective_type(), Some(SearchType::Card));
        assert_eq!(bar.parsed().search_type, SearchType::Card);

        bar.backspace();
        bar.type_char('7');
        assert_eq!(bar.type_override, None);
        assert_eq!(bar.effective_type(), Some(SearchType::Phone));
    }

    #[test]
    fn test_cycle_from_blank_starts_at_uid() {
        let mut bar = SearchBar::new();
        bar.cycle_type();
        assert_eq!(bar.effective_type(), Some(SearchType::Uid));
    }

    #[test]
    fn test_editing_is_utf8_aware() {
        let mut bar = typed("Иван");
        bar.cursor_left();
        bar.backspace();
        assert_eq!(bar.input, "Ивн");
        bar.cursor_right();
        bar.type_char('!');
        assert_eq!(bar.input, "Ивн!");
        bar.cursor_right();
        assert_eq!(bar.cursor, bar.input.len());
    }

    #[test]
    fn test_history_dedupes_and_caps() {
        let mut bar = SearchBar::new();
        for i in 0..12 {
            bar.add_to_history(&format!("q{i}"));
        }
        bar.add_to_history("q5");
        bar.add_to_history("   ");
        assert_eq!(bar.history.len(), MAX_SEARCH_HISTORY);
        assert_eq!(bar.history[0], "q5");
        assert_eq!(bar.history.iter().filter(|q| *q == "q5").count(), 1);
    }

    #[test]
    fn test_history_navigation_restores_draft() {
        let mut bar = SearchBar::with_history(vec!["new".into(), "old".into()]);
        bar.set_input("draft");

        bar.history_prev();
        assert_eq!(bar.input, "new");
        bar.history_prev();
        assert_eq!(bar.input, "old");
        bar.history_prev();
        assert_eq!(bar.input, "old");

        bar.history_next();
        assert_eq!(bar.input, "new");
        bar.history_next();
        assert_eq!(bar.input, "draft");
    }
}
