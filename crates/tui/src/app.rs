//! Application state for the log viewer.
//!
//! Responsibilities:
//! - Own all UI state: the log loader, the analysis runner, notifications,
//!   table selection and theme.
//! - Apply actions and report which ones need a side effect.
//!
//! Does NOT handle:
//! - Network I/O (see `crate::runtime::side_effects`).
//! - Terminal setup (see `crate::runtime::terminal`).
//!
//! Invariants:
//! - The event loop is the only mutator of `App`.
//! - `update` returns a request action only when its transition was accepted,
//!   so a no-op request never reaches the network.

pub mod analysis;
pub mod input;
pub mod log_loader;
mod navigation;
mod render;

use logview_config::Theme;
use ratatui::{layout::Rect, widgets::TableState};

use crate::action::Action;
use crate::ui::notify::{NotificationCenter, Notifier};
use crate::ui::popup::{Popup, PopupType};

pub use analysis::{AnalysisRunner, AnalysisState};
pub use log_loader::{LoadState, LogLoader};
pub use render::record_details;

/// Height of the header bar, borders included.
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the footer bar, borders included.
pub const FOOTER_HEIGHT: u16 = 3;

/// Main application state.
#[derive(Debug)]
pub struct App {
    pub loader: LogLoader,
    pub analysis: AnalysisRunner,
    pub notifications: NotificationCenter,
    pub table_state: TableState,
    pub theme: Theme,
    /// Backend base URL, shown in the header
    pub base_url: String,
    pub spinner_frame: u8,
    /// Last known terminal size
    pub last_area: Rect,
}

impl App {
    pub fn new(theme: Theme, base_url: impl Into<String>) -> Self {
        Self {
            loader: LogLoader::new(),
            analysis: AnalysisRunner::new(),
            notifications: NotificationCenter::new(),
            table_state: TableState::default(),
            theme,
            base_url: base_url.into(),
            spinner_frame: 0,
            last_area: Rect::default(),
        }
    }

    /// Whether the analyze action is currently available.
    pub fn analysis_enabled(&self) -> bool {
        self.analysis.is_enabled(self.loader.is_loaded())
    }

    /// Apply an action to the state.
    ///
    /// Returns the action the runtime must act on next: an accepted
    /// `LoadLogs`/`RunAnalysis` request for the side-effect dispatcher, or
    /// `Quit`.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Input(key) => {
                let next = self.handle_input(key)?;
                return self.update(next);
            }
            Action::Quit => return Some(Action::Quit),
            Action::LoadLogs => {
                return self
                    .loader
                    .begin(&mut self.notifications)
                    .then_some(Action::LoadLogs);
            }
            Action::RunAnalysis => {
                let logs_loaded = self.loader.is_loaded();
                return self
                    .analysis
                    .try_start(logs_loaded, &mut self.notifications)
                    .then_some(Action::RunAnalysis);
            }
            Action::LogsLoaded(result) => {
                self.loader.finish(result, &mut self.notifications);
                self.select_first();
            }
            Action::AnalysisFinished(result) => {
                self.analysis.finish(result, &mut self.notifications);
            }
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.notifications.prune_expired();
            }
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
            }
            Action::NavigateUp => self.move_selection(-1),
            Action::NavigateDown => self.move_selection(1),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            Action::GoToTop => self.select_first(),
            Action::GoToBottom => self.select_last(),
            Action::ShowRecordDetails => self.show_selected_details(),
            Action::OpenHelp => self.notifications.open(Popup::builder(PopupType::Help).build()),
            Action::CloseDialog => self.notifications.close_dialog(),
            Action::DialogScrollUp => self.notifications.scroll_up(),
            Action::DialogScrollDown => self.notifications.scroll_down(),
            Action::DismissErrors => {
                let removed = self.notifications.dismiss_errors();
                tracing::debug!(removed, "Dismissed error notifications");
            }
        }
        None
    }

    fn show_selected_details(&mut self) {
        let Some(records) = self.loader.records() else {
            return;
        };
        let Some(record) = self.table_state.selected().and_then(|i| records.get(i)) else {
            return;
        };
        let title = format!("Log #{}", record.id);
        let body = record_details(record);
        self.notifications.show_info(&title, &body);
    }
}
