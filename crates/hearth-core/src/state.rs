use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::{Board, Boards};
use crate::pomodoro::{PomodoroSession, PomodoroSettings, PomodoroTask};
use crate::salat::{SalatLocation, SalatTimes};
use crate::theme::{AccentColor, Theme, ViewScale};
use crate::view::ViewMode;

pub const DEFAULT_AUTO_COLOR_INTERVAL_SECS: u32 = 30;
/// Oldest notifications are dropped past this many.
pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ModalKind {
    Notifications,
    Trash,
    Settings,
    VerseSelector,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Notifications => "Notifications",
            ModalKind::Trash => "Trash",
            ModalKind::Settings => "Settings",
            ModalKind::VerseSelector => "Choose a Verse",
        }
    }
}

/// Snapshot of everything the chrome reads.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub boards: Boards,
    pub active_board_id: String,
    pub view_mode: ViewMode,
    pub theme: Theme,
    pub primary_color: AccentColor,
    pub auto_color_change: bool,
    pub auto_color_interval_secs: u32,
    pub view_scale: ViewScale,
    pub pomodoro: PomodoroSession,
    pub pomodoro_tasks: Vec<PomodoroTask>,
    pub notifications: Vec<Notification>,
    pub salat_location: SalatLocation,
    pub salat_times: SalatTimes,
    pub open_modal: Option<ModalKind>,
}

impl Default for AppState {
    fn default() -> Self {
        let boards = Boards::default();
        let active_board_id = boards
            .first()
            .map(|board| board.id.clone())
            .unwrap_or_default();
        Self {
            boards,
            active_board_id,
            view_mode: ViewMode::Board,
            theme: Theme::default(),
            primary_color: AccentColor::default(),
            auto_color_change: false,
            auto_color_interval_secs: DEFAULT_AUTO_COLOR_INTERVAL_SECS,
            view_scale: ViewScale::default(),
            pomodoro: PomodoroSession::default(),
            pomodoro_tasks: Vec::new(),
            notifications: Vec::new(),
            salat_location: SalatLocation::default(),
            salat_times: SalatTimes::new(),
            open_modal: None,
        }
    }
}

impl AppState {
    pub fn active_board(&self) -> Option<&Board> {
        self.boards.get(&self.active_board_id)
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
        let excess = self.notifications.len().saturating_sub(MAX_NOTIFICATIONS);
        self.notifications.drain(..excess);
    }

    pub fn persisted_settings(&self) -> PersistedSettings {
        PersistedSettings {
            theme: self.theme,
            primary_color: self.primary_color,
            auto_color_change: self.auto_color_change,
            auto_color_interval_secs: self.auto_color_interval_secs,
            view_scale: self.view_scale,
            pomodoro: self.pomodoro.settings.clone(),
            pomodoro_compact_view: self.pomodoro.compact_view,
            salat_location: self.salat_location.clone(),
        }
    }

    pub fn apply_persisted_settings(&mut self, settings: PersistedSettings) {
        self.theme = settings.theme;
        self.primary_color = settings.primary_color;
        self.auto_color_change = settings.auto_color_change;
        self.auto_color_interval_secs =
            crate::theme::clamp_auto_color_interval(settings.auto_color_interval_secs);
        self.view_scale = settings.view_scale;
        self.pomodoro.compact_view = settings.pomodoro_compact_view;
        self.pomodoro.apply_settings(settings.pomodoro);
        self.salat_location = settings.salat_location;
    }
}

/// User settings saved by `SaveSettings` and restored on start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersistedSettings {
    pub theme: Theme,
    pub primary_color: AccentColor,
    pub auto_color_change: bool,
    pub auto_color_interval_secs: u32,
    pub view_scale: ViewScale,
    pub pomodoro: PomodoroSettings,
    pub pomodoro_compact_view: bool,
    pub salat_location: SalatLocation,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        AppState::default().persisted_settings()
    }
}
