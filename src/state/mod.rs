//! State management module for the LOUPE TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`NavigationState`] - Active page, tabs and list selections
//! - [`DataState`] - Deals, team, statistics, plan and lookup results
//! - [`UiState`] - Popups, the search bar, toasts and help
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                         App                           │
//! ├─────────────────┬───────────────┬─────────────────────┤
//! │ NavigationState │   DataState   │       UiState       │
//! │  - page / tabs  │  - deals      │  - popups           │
//! │  - selections   │  - team       │  - search bar       │
//! │  - filters      │  - plan       │  - toasts           │
//! └─────────────────┴───────────────┴─────────────────────┘
//!            │ persisted through a KeyValueStore │
//! ```
//!
//! # Example
//!
//! ```ignore
//! use crate::state::{App, StartupOptions};
//!
//! let app = App::new(StartupOptions::default()).await?;
//! ```

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::client::LoupeClient;
use crate::domain::{CounterpartyProfile, Plan};
use crate::store::KeyValueStore;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod navigation;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

// Navigation types
pub use navigation::{ListLengths, NavigationState, Page, TeamTab};

// Data types
pub use data::DataState;

// UI state types
pub use ui_state::{
    ConfirmAction, FeedbackField, FeedbackForm, PaymentState, PopupState, RangeField, RangeForm,
    ReviewForm, SearchBar, TextTarget, UiState,
};

// Configuration types
pub use config::AppConfig;

use platform::ClipboardManager;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from spawned tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Counterparty lookup finished.
    SearchCompleted(Result<Vec<CounterpartyProfile>, String>),
    /// The payment for `Plan` went through.
    PaymentConfirmed(Plan),
    /// Time to close the confirmed payment dialog.
    PaymentClosed,
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Page to open instead of the configured default.
    pub page: Option<Page>,
    /// Counterparty lookup to run right after startup.
    pub search: Option<String>,
    /// Keep everything in memory; nothing is written to disk.
    pub ephemeral: bool,
    /// Overrides the directory of `store.json` and the log file.
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// # Example
///
/// ```ignore
/// use crate::state::{App, StartupOptions};
///
/// let mut app = App::new(StartupOptions::default()).await?;
/// app.run(&mut terminal).await?;
/// ```
pub struct App {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Navigation state - page, tabs, selections.
    pub nav: NavigationState,

    /// Data state - deals, team, statistics, plan.
    pub data: DataState,

    /// UI state - popups, search bar, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    pub config: AppConfig,

    /// Where `config` is saved; `None` keeps it in memory only.
    pub(crate) config_path: Option<PathBuf>,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // Receivers may be dropped during shutdown.
    /// Sender for app messages (cloned for spawned tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Services
    // ========================================================================
    pub(crate) client: LoupeClient,

    pub(crate) store: Box<dyn KeyValueStore>,

    pub(crate) clipboard: ClipboardManager,

    // ========================================================================
    // Startup Options
    // ========================================================================
    /// Options passed at startup (e.g., initial search).
    pub(crate) startup_options: Option<StartupOptions>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.nav.page)
            .field("plan", &self.data.plan)
            .field("popup", &self.ui.popup_state)
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Lengths of every selectable list, for clamping selections.
    #[must_use]
    pub fn list_lengths(&self) -> ListLengths {
        ListLengths {
            results: self.data.results.len(),
            deals: self
                .data
                .visible_deals(self.nav.deal_scope, &self.nav.deal_filter)
                .len(),
            members: self.data.team.members.len(),
            messages: self.data.team.messages.len(),
            notes: self.data.team.notes.len(),
            performers: self.data.performance.len(),
            plans: Plan::ALL.len(),
        }
    }

    /// Length of the list the arrow keys move on right now.
    #[must_use]
    pub fn current_list_len(&self) -> usize {
        let lengths = self.list_lengths();
        match self.nav.page {
            Page::Home => lengths.results,
            Page::Deals => lengths.deals,
            Page::Team => match self.nav.team_tab {
                TeamTab::Members => lengths.members,
                TeamTab::Chat => lengths.messages,
                TeamTab::Notes => lengths.notes,
            },
            Page::Statistics => lengths.performers,
            Page::Settings => lengths.plans,
        }
    }

    /// Whether the active plan opens the current page.
    #[must_use]
    pub fn current_page_unlocked(&self) -> bool {
        self.nav.page.is_unlocked(&self.data.capabilities())
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Lookup, persistence, clipboard, browser and payment actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
