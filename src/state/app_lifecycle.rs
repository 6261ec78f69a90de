//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates an application instance from disk or memory
//! - `with_services()` - Assembles an instance from explicit parts
//! - `run()` - Main event loop
//! - Startup handling (feedback prompt, `--search`)

use std::path::PathBuf;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::client::LoupeClient;
use crate::constants::TICK_RATE;
use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::tui::Tui;
use crate::ui;

use super::platform::{AppPaths, ClipboardManager};
use super::{App, AppConfig, DataState, NavigationState, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration and the store.
    ///
    /// With `ephemeral` set nothing is read from or written to disk. A
    /// corrupt store file is left untouched and the session runs in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub async fn new(startup_options: StartupOptions) -> Result<Self> {
        let paths = startup_options
            .data_dir
            .clone()
            .map_or_else(AppPaths::new, AppPaths::with_data_dir);

        if startup_options.ephemeral {
            tracing::info!("starting with an in-memory store");
            return Ok(Self::with_services(
                startup_options,
                AppConfig::default(),
                None,
                Box::new(MemoryStore::default()),
                LoupeClient::new(),
                ClipboardManager::new(),
            ));
        }

        let config_path = match paths.config_file() {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!("config directory unavailable: {err}");
                None
            }
        };
        let config = config_path
            .as_deref()
            .map(AppConfig::load_from)
            .unwrap_or_default();

        let mut store_warning = None;
        let store: Box<dyn KeyValueStore> = match JsonFileStore::open(&paths.data_dir()?) {
            Ok(store) => {
                tracing::info!(path = %store.path().display(), "store opened");
                Box::new(store)
            }
            Err(err) => {
                tracing::warn!("store unavailable, falling back to memory: {err}");
                store_warning = Some(format!("{err}\n\nChanges in this session will not be saved."));
                Box::new(MemoryStore::default())
            }
        };

        let mut app = Self::with_services(
            startup_options,
            config,
            config_path,
            store,
            LoupeClient::new(),
            ClipboardManager::new(),
        );
        if let Some(warning) = store_warning {
            app.ui.show_message(warning);
        }
        Ok(app)
    }

    /// Assembles an App from explicit services and loads persisted data.
    ///
    /// # Arguments
    ///
    /// * `startup_options` - CLI options (page, startup search)
    /// * `config` - Loaded configuration
    /// * `config_path` - Where to save configuration changes, `None` to keep them in memory
    /// * `store` - Backing key-value store
    /// * `client` - Counterparty directory client
    /// * `clipboard` - Clipboard backend
    #[must_use]
    pub fn with_services(
        startup_options: StartupOptions,
        config: AppConfig,
        config_path: Option<PathBuf>,
        store: Box<dyn KeyValueStore>,
        client: LoupeClient,
        clipboard: ClipboardManager,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut nav = NavigationState::new();
        nav.go_to(startup_options.page.unwrap_or(config.default_page));

        let mut app = Self {
            nav,
            data: DataState::from_client(&client, &config.team_name),
            ui: UiState::new(),
            config,
            config_path,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
            store,
            clipboard,
            startup_options: Some(startup_options),
        };
        app.load_persisted();
        app
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!(page = self.nav.page.as_str(), plan = self.data.plan.id(), "app started");
        self.process_startup();
        terminal.draw(|frame| ui::render(self, frame))?;

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                self.nav.clamp(self.list_lengths());
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!(checks = self.data.checks, "app exiting");
        Ok(())
    }

    /// Runs the `--search` lookup or, without one, asks for feedback when
    /// none was left yet.
    pub(crate) fn process_startup(&mut self) {
        let Some(options) = self.startup_options.take() else {
            return;
        };

        match options.search {
            Some(query) => {
                self.ui.search.set_input(query);
                self.submit_search();
            }
            None if self.data.feedback.is_none() && !self.ui.has_active_popup() => {
                self.open_feedback(None);
            }
            None => {}
        }
    }
}
