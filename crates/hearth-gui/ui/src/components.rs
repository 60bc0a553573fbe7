mod board_switcher;
mod header;
mod live_clock;
mod modal_host;
mod notification_bell;
mod overflow_menu;
mod pomodoro_settings_view;
mod pomodoro_stats_view;
mod pomodoro_summary;
mod pomodoro_tasks_view;
mod pomodoro_timer;
mod pomodoro_timer_view;
mod salat_clock;
mod salat_trigger;
mod title_editor;
mod view_switcher;

pub use board_switcher::BoardSwitcher;
pub use header::Header;
pub use live_clock::LiveClock;
pub use modal_host::ModalHost;
pub use notification_bell::NotificationBell;
pub use overflow_menu::OverflowMenu;
pub use pomodoro_settings_view::PomodoroSettingsView;
pub use pomodoro_stats_view::PomodoroStatsView;
pub use pomodoro_summary::PomodoroSummary;
pub use pomodoro_tasks_view::PomodoroTasksView;
pub use pomodoro_timer::PomodoroTimer;
pub use pomodoro_timer_view::PomodoroTimerView;
pub use salat_clock::SalatClock;
pub use salat_trigger::SalatTrigger;
pub use title_editor::TitleEditor;
pub use view_switcher::ViewSwitcher;
