//! UI state management for the LOUPE TUI.
//!
//! This module manages UI presentation concerns including:
//! - Popup/modal state
//! - The inline search bar
//! - Toast notifications
//! - The help overlay
//!
//! # Design
//!
//! The UI state is separate from navigation and data state,
//! focusing purely on presentation layer concerns.

mod popups;
mod search;

pub use popups::{
    ConfirmAction, FeedbackField, FeedbackForm, PaymentState, PopupState, RangeField, RangeForm,
    ReviewForm, TextTarget,
};
pub use search::SearchBar;

use crate::domain::CounterpartyProfile;

// ============================================================================
// UI State
// ============================================================================

/// UI state: popup state, search bar, toasts and help.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.show_toast("[+] Copied", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    // === Popup State ===
    /// Current popup/modal state.
    pub popup_state: PopupState,

    // === Inline Search ===
    pub search: SearchBar,

    // === Toast Notifications ===
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,

    // === Help Popup ===
    /// Whether the help popup is visible.
    pub show_help: bool,
    /// Scroll offset for help popup content.
    pub help_scroll_offset: u16,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if a popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the quit confirmation popup.
    pub fn open_confirm_quit(&mut self) {
        self.popup_state = PopupState::ConfirmQuit;
    }

    pub fn open_confirm(&mut self, action: ConfirmAction) {
        self.popup_state = PopupState::Confirm(action);
    }

    pub fn open_counterparty(&mut self, profile: CounterpartyProfile) {
        self.popup_state = PopupState::Counterparty(Box::new(profile));
    }

    /// Shows the result picker for several lookup hits.
    pub fn show_search_results(&mut self, results: Vec<CounterpartyProfile>) {
        self.popup_state = PopupState::SearchResults {
            results,
            selected: 0,
        };
    }

    /// Moves the result picker selection, wrapping at both ends.
    pub fn move_result_selection(&mut self, forward: bool) {
        if let PopupState::SearchResults { results, selected } = &mut self.popup_state
            && !results.is_empty()
        {
            let len = results.len();
            *selected = if forward {
                (*selected + 1) % len
            } else {
                (*selected + len - 1) % len
            };
        }
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    /// * `ticks` - Number of ticks before auto-dismiss
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    // ========================================================================
    // Help Popup
    // ========================================================================

    /// Toggles the help popup visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if !self.show_help {
            self.help_scroll_offset = 0;
        }
    }

    /// Scrolls help popup up by one line.
    pub fn scroll_help_up(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1);
    }

    /// Scrolls help popup down by one line.
    pub fn scroll_help_down(&mut self) {
        self.help_scroll_offset = self.help_scroll_offset.saturating_add(1);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ProfileMother;

    #[test]
    fn test_ui_state_popup_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.show_message("Test");
        assert!(ui.has_active_popup());

        ui.dismiss_popup();
        assert!(!ui.has_active_popup());

        ui.open_confirm(ConfirmAction::DeleteNote(2));
        assert_eq!(
            ui.popup_state,
            PopupState::Confirm(ConfirmAction::DeleteNote(2))
        );
    }

    #[test]
    fn test_result_selection_wraps() {
        let mut ui = UiState::new();
        ui.show_search_results(vec![
            ProfileMother::billigans(),
            ProfileMother::trader123(),
            ProfileMother::crypto_king(),
        ]);

        ui.move_result_selection(false);
        assert!(matches!(
            ui.popup_state,
            PopupState::SearchResults { selected: 2, .. }
        ));
        ui.move_result_selection(true);
        ui.move_result_selection(true);
        assert!(matches!(
            ui.popup_state,
            PopupState::SearchResults { selected: 1, .. }
        ));

        // Wrong popup state is a no-op
        ui.dismiss_popup();
        ui.move_result_selection(true);
        assert!(!ui.has_active_popup());
    }

    #[test]
    fn test_ui_state_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(
            ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
            Some("Hello")
        );

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_help_popup_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.show_help);

        ui.toggle_help();
        assert!(ui.show_help);

        ui.scroll_help_down();
        ui.scroll_help_down();
        assert_eq!(ui.help_scroll_offset, 2);
        ui.scroll_help_up();
        assert_eq!(ui.help_scroll_offset, 1);
        ui.scroll_help_up();
        ui.scroll_help_up();
        assert_eq!(ui.help_scroll_offset, 0);

        // Toggle off resets scroll
        ui.scroll_help_down();
        ui.toggle_help();
        assert!(!ui.show_help);
        assert_eq!(ui.help_scroll_offset, 0);
    }
}
