use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pomodoro::{PomodoroMode, PomodoroSettings};
use crate::salat::{SalatLocation, SalatTimes};
use crate::state::ModalKind;
use crate::theme::{AccentColor, Theme, ViewScale};
use crate::view::ViewMode;

/// Every change the chrome can ask of the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    SwitchBoard { id: String },
    AddBoard { id: String, title: String },
    DeleteBoard { id: String },
    UpdateBoardTitle { id: String, title: String },
    SetViewMode(ViewMode),

    TogglePomodoroTimer,
    ResetPomodoroTimer,
    SkipPomodoroMode,
    SetPomodoroMode(PomodoroMode),
    TickPomodoro { now: DateTime<Utc>, today: NaiveDate },
    UpdatePomodoroSettings(PomodoroSettings),
    AddPomodoroTask { id: Uuid, text: String },
    TogglePomodoroTask { id: Uuid },
    DeletePomodoroTask { id: Uuid },
    SetPomodoroCurrentTask { text: String },
    SetPomodoroCompactView(bool),
    SetPomodoroPopoverOpen(bool),

    SetSalatLocation(SalatLocation),
    SetSalatTimes { location: SalatLocation, times: SalatTimes },

    OpenModal(ModalKind),
    CloseModal,
    MarkNotificationsRead,

    SetTheme(Theme),
    SetPrimaryColor(AccentColor),
    ToggleAutoColorChange,
    SetAutoColorChangeInterval(u32),
    SetAppViewScale(ViewScale),
    SaveSettings,
    ResetSettings,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SwitchBoard { .. } => "switch_board",
            Intent::AddBoard { .. } => "add_board",
            Intent::DeleteBoard { .. } => "delete_board",
            Intent::UpdateBoardTitle { .. } => "update_board_title",
            Intent::SetViewMode(_) => "set_view_mode",
            Intent::TogglePomodoroTimer => "toggle_pomodoro_timer",
            Intent::ResetPomodoroTimer => "reset_pomodoro_timer",
            Intent::SkipPomodoroMode => "skip_pomodoro_mode",
            Intent::SetPomodoroMode(_) => "set_pomodoro_mode",
            Intent::TickPomodoro { .. } => "tick_pomodoro",
            Intent::UpdatePomodoroSettings(_) => "update_pomodoro_settings",
            Intent::AddPomodoroTask { .. } => "add_pomodoro_task",
            Intent::TogglePomodoroTask { .. } => "toggle_pomodoro_task",
            Intent::DeletePomodoroTask { .. } => "delete_pomodoro_task",
            Intent::SetPomodoroCurrentTask { .. } => "set_pomodoro_current_task",
            Intent::SetPomodoroCompactView(_) => "set_pomodoro_compact_view",
            Intent::SetPomodoroPopoverOpen(_) => "set_pomodoro_popover_open",
            Intent::SetSalatLocation(_) => "set_salat_location",
            Intent::SetSalatTimes { .. } => "set_salat_times",
            Intent::OpenModal(_) => "open_modal",
            Intent::CloseModal => "close_modal",
            Intent::MarkNotificationsRead => "mark_notifications_read",
            Intent::SetTheme(_) => "set_theme",
            Intent::SetPrimaryColor(_) => "set_primary_color",
            Intent::ToggleAutoColorChange => "toggle_auto_color_change",
            Intent::SetAutoColorChangeInterval(_) => "set_auto_color_change_interval",
            Intent::SetAppViewScale(_) => "set_app_view_scale",
            Intent::SaveSettings => "save_settings",
            Intent::ResetSettings => "reset_settings",
        }
    }

    /// Ticks arrive every second and are not worth a debug line each.
    pub fn is_noisy(&self) -> bool {
        matches!(self, Intent::TickPomodoro { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_serialize_with_type_tag() {
        let json = serde_json::to_value(Intent::SetViewMode(ViewMode::Habits)).expect("serialize");
        assert_eq!(json["type"], "SET_VIEW_MODE");
        assert_eq!(json["payload"], "habits");

        let json = serde_json::to_value(Intent::CloseModal).expect("serialize");
        assert_eq!(json["type"], "CLOSE_MODAL");
    }
}
