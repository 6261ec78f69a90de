//! Command pattern for key event handling in the TUI application.
//!
//! Key events are translated into [`AppCommand`]s by [`map_key`], a pure
//! function of the key and the current [`InputContext`]. The `App` then
//! executes the command.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = map_key(key_event, &context);
//! app.execute_command(command).await?;
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::navigation::Page;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
///
/// The input context determines which keybindings are active and how
/// key events should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    // === Pages ===
    Home,
    Deals,
    Team,
    Statistics,
    Settings,

    // === Overlays ===
    /// Typing into the Home search bar.
    InlineSearch,
    HelpPopup,
    ConfirmQuit,
    /// Yes/no prompt for a destructive action.
    ConfirmAction,
    MessagePopup,
    /// Picker shown when a lookup returns several profiles.
    SearchResults,
    CounterpartyCard,
    DealDetail,
    FeedbackForm,
    ReviewForm,
    TextInput,
    Payment,
    Invite,
    MemberDrawer,
    RangeForm,
}

impl InputContext {
    /// Context of a page when nothing is layered on top of it.
    #[must_use]
    pub const fn for_page(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::Deals => Self::Deals,
            Page::Team => Self::Team,
            Page::Statistics => Self::Statistics,
            Page::Settings => Self::Settings,
        }
    }

    /// Returns `true` if this context represents a popup/overlay state.
    #[must_use]
    pub const fn is_popup(&self) -> bool {
        !matches!(
            self,
            Self::Home
                | Self::Deals
                | Self::Team
                | Self::Statistics
                | Self::Settings
                | Self::InlineSearch
        )
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
///
/// This enum represents the "what" of user intent, decoupled from the "how"
/// of key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Open the quit confirmation.
    RequestQuit,
    /// Exit the application.
    ConfirmQuit,
    ToggleHelp,
    ScrollHelpUp,
    ScrollHelpDown,
    ToggleTheme,
    ToggleLocale,

    // === Page Navigation ===
    NextPage,
    PrevPage,
    GoToPage(Page),

    // === Lists and Popups ===
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Open or confirm the highlighted item.
    Select,
    /// Close the current popup or leave the search bar.
    Dismiss,
    /// Accept a yes/no prompt.
    Confirm,
    /// Copy whatever the current context offers (query, invite, wallet, UID).
    Copy,

    // === Inline Search ===
    FocusSearch,
    TypeChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    HistoryPrev,
    HistoryNext,
    CycleSearchType,
    SubmitSearch,

    // === Deals ===
    ToggleDealScope,
    CycleStatusFilter,
    CycleExchangeFilter,
    ReviewDeal,
    OpenCounterparty,

    // === Team ===
    NewEntry,
    EditEntry,
    DeleteEntry,
    UnpinMessage,
    InviteMember,

    // === Statistics ===
    CycleRange,
    EditCustomRange,

    // === Settings ===
    CancelSubscription,
    OpenSupportTelegram,
    OpenSupportEmail,
    OpenFeedback,

    // === Forms ===
    NextField,
    PrevField,
    Submit,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to an application command based on the current context.
///
/// This is a pure function with no side effects.
///
/// # Arguments
///
/// * `key` - The key event to map
/// * `context` - The current input context
///
/// # Returns
///
/// The appropriate `AppCommand` for the given key and context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return if context.is_popup() || *context == InputContext::InlineSearch {
            AppCommand::Dismiss
        } else {
            AppCommand::RequestQuit
        };
    }

    match context {
        InputContext::Home => map_home_keys(key),
        InputContext::Deals => map_deals_keys(key),
        InputContext::Team => map_team_keys(key),
        InputContext::Statistics => map_statistics_keys(key),
        InputContext::Settings => map_settings_keys(key),
        InputContext::InlineSearch => map_inline_search_keys(key),
        InputContext::HelpPopup => map_help_keys(key),
        InputContext::ConfirmQuit => map_confirm_quit_keys(key),
        InputContext::ConfirmAction => map_confirm_action_keys(key),
        InputContext::MessagePopup => map_message_popup_keys(key),
        InputContext::SearchResults => map_search_results_keys(key),
        InputContext::CounterpartyCard => map_counterparty_keys(key),
        InputContext::DealDetail => map_deal_detail_keys(key),
        InputContext::FeedbackForm => map_feedback_keys(key),
        InputContext::ReviewForm => map_review_keys(key),
        InputContext::TextInput | InputContext::RangeForm => map_text_form_keys(key),
        InputContext::Payment => map_payment_keys(key),
        InputContext::Invite => map_invite_keys(key),
        InputContext::MemberDrawer => map_drawer_keys(key),
    }
}

/// Keys shared by every page.
fn map_global_page_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::RequestQuit,
        KeyCode::Char('?') | KeyCode::F(1) => AppCommand::ToggleHelp,
        KeyCode::Tab => AppCommand::NextPage,
        KeyCode::BackTab => AppCommand::PrevPage,
        KeyCode::Char(c @ '1'..='5') => c
            .to_digit(10)
            .and_then(|d| Page::from_index(d as usize - 1))
            .map_or(AppCommand::Noop, AppCommand::GoToPage),
        KeyCode::Char('t') => AppCommand::ToggleTheme,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Enter => AppCommand::Select,
        _ => AppCommand::Noop,
    }
}

fn map_home_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('/' | 's') => AppCommand::FocusSearch,
        KeyCode::Char('f') => AppCommand::OpenFeedback,
        KeyCode::Char('y') => AppCommand::Copy,
        _ => map_global_page_keys(key),
    }
}

fn map_deals_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('s') => AppCommand::ToggleDealScope,
        KeyCode::Char('f') => AppCommand::CycleStatusFilter,
        KeyCode::Char('e') => AppCommand::CycleExchangeFilter,
        KeyCode::Char('r') => AppCommand::ReviewDeal,
        KeyCode::Char('c') => AppCommand::OpenCounterparty,
        _ => map_global_page_keys(key),
    }
}

fn map_team_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppCommand::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::MoveRight,
        KeyCode::Char('n') => AppCommand::NewEntry,
        KeyCode::Char('e') => AppCommand::EditEntry,
        KeyCode::Char('d') | KeyCode::Delete => AppCommand::DeleteEntry,
        KeyCode::Char('u') => AppCommand::UnpinMessage,
        KeyCode::Char('i') => AppCommand::InviteMember,
        _ => map_global_page_keys(key),
    }
}

fn map_statistics_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppCommand::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::MoveRight,
        KeyCode::Char('r') => AppCommand::CycleRange,
        KeyCode::Char('c') => AppCommand::EditCustomRange,
        _ => map_global_page_keys(key),
    }
}

fn map_settings_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('x') => AppCommand::CancelSubscription,
        KeyCode::Char('l') => AppCommand::ToggleLocale,
        KeyCode::Char('s') => AppCommand::OpenSupportTelegram,
        KeyCode::Char('m') => AppCommand::OpenSupportEmail,
        KeyCode::Char('f') => AppCommand::OpenFeedback,
        _ => map_global_page_keys(key),
    }
}

fn map_inline_search_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Enter => AppCommand::SubmitSearch,
        KeyCode::Tab => AppCommand::CycleSearchType,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Left => AppCommand::CursorLeft,
        KeyCode::Right => AppCommand::CursorRight,
        KeyCode::Up => AppCommand::HistoryPrev,
        KeyCode::Down => AppCommand::HistoryNext,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

fn map_help_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::F(1) => AppCommand::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollHelpUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollHelpDown,
        _ => AppCommand::Noop,
    }
}

fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('y' | 'Y' | 'q') | KeyCode::Enter => AppCommand::ConfirmQuit,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

fn map_confirm_action_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => AppCommand::Confirm,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
        KeyCode::Char('q') => AppCommand::RequestQuit,
        _ => AppCommand::Noop,
    }
}

fn map_search_results_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Enter => AppCommand::Select,
        _ => AppCommand::Noop,
    }
}

fn map_counterparty_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::Dismiss,
        KeyCode::Char('y' | 'c') => AppCommand::Copy,
        _ => AppCommand::Noop,
    }
}

fn map_deal_detail_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::Dismiss,
        KeyCode::Char('r') => AppCommand::ReviewDeal,
        KeyCode::Char('c') => AppCommand::OpenCounterparty,
        _ => AppCommand::Noop,
    }
}

fn map_feedback_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Enter => AppCommand::Submit,
        KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => AppCommand::PrevField,
        KeyCode::Left => AppCommand::MoveLeft,
        KeyCode::Right => AppCommand::MoveRight,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

fn map_review_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Enter => AppCommand::Submit,
        KeyCode::Left => AppCommand::MoveLeft,
        KeyCode::Right => AppCommand::MoveRight,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

fn map_text_form_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::Dismiss,
        KeyCode::Enter => AppCommand::Submit,
        KeyCode::Tab => AppCommand::NextField,
        KeyCode::BackTab => AppCommand::PrevField,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

fn map_payment_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
        KeyCode::Left | KeyCode::Char('h') => AppCommand::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppCommand::MoveRight,
        KeyCode::Char('c' | 'y') => AppCommand::Copy,
        KeyCode::Enter => AppCommand::Submit,
        _ => AppCommand::Noop,
    }
}

fn map_invite_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::Dismiss,
        KeyCode::Char('c' | 'y') => AppCommand::Copy,
        _ => AppCommand::Noop,
    }
}

fn map_drawer_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
