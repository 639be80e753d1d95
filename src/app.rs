//! Application state management for inkweather
//!
//! Holds the last published snapshot, the outcome of the last update cycle
//! and the UI flags driven by keyboard input.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::config::UiLabels;
use crate::forecast::ForecastSnapshot;
use crate::refresh::RefreshMessage;

/// Application state enum representing the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No snapshot has been published yet
    Loading,
    /// A snapshot is on screen
    Forecast,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Last successfully assembled snapshot
    pub snapshot: Option<ForecastSnapshot>,
    /// Message of the last failed update, cleared on success
    pub last_error: Option<String>,
    /// An update cycle is in flight
    pub refreshing: bool,
    /// Wall-clock time of the last successful update
    pub last_refresh: Option<DateTime<Local>>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating a refresh has been requested
    pub refresh_requested: bool,
    /// Localized names for the renderer
    pub labels: UiLabels,
}

impl App {
    /// Creates a new App instance with default labels
    pub fn new() -> Self {
        Self::with_labels(UiLabels::default())
    }

    /// Creates a new App instance with the given labels
    pub fn with_labels(labels: UiLabels) -> Self {
        Self {
            state: AppState::Loading,
            snapshot: None,
            last_error: None,
            refreshing: false,
            last_refresh: None,
            should_quit: false,
            show_help: false,
            refresh_requested: false,
            labels,
        }
    }

    /// Applies a message from the refresh task
    ///
    /// # Returns
    /// `true` if a snapshot with a new observation time was published
    pub fn apply_message(&mut self, message: RefreshMessage) -> bool {
        match message {
            RefreshMessage::RefreshStarted => {
                self.refreshing = true;
                false
            }
            RefreshMessage::ForecastUpdated(snapshot) => {
                self.refreshing = false;
                self.last_error = None;
                self.last_refresh = Some(Local::now());
                self.apply_snapshot(*snapshot)
            }
            RefreshMessage::RefreshError(message) => {
                // keep showing the previous snapshot
                self.refreshing = false;
                self.last_error = Some(message);
                false
            }
        }
    }

    /// Publishes a snapshot
    ///
    /// # Returns
    /// `true` unless the previous snapshot has the same update timestamp
    pub fn apply_snapshot(&mut self, snapshot: ForecastSnapshot) -> bool {
        let changed = self
            .snapshot
            .as_ref()
            .map_or(true, |old| {
                old.current.update_timestamp != snapshot.current.update_timestamp
            });
        self.snapshot = Some(snapshot);
        self.state = AppState::Forecast;
        changed
    }

    /// Returns and clears the pending refresh request
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// Handles keyboard input events
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.refresh_requested = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
