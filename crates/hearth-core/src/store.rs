use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::board::{Board, can_delete_board, normalize_board_title, title_commit};
use crate::intent::Intent;
use crate::pomodoro::{PomodoroMode, PomodoroTask, normalize_task_text};
use crate::state::{AppState, Notification, PersistedSettings};
use crate::theme::clamp_auto_color_interval;

/// Where `SaveSettings` / `ResetSettings` persist user settings.
pub trait SettingsSink {
    fn load(&self) -> anyhow::Result<Option<PersistedSettings>>;
    fn save(&self, settings: &PersistedSettings) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Changed,
    Unchanged,
    Refused(&'static str),
}

fn changed_if(flag: bool) -> Reduction {
    if flag {
        Reduction::Changed
    } else {
        Reduction::Unchanged
    }
}

/// Applies one intent to the state. Intents that would break an invariant
/// are refused and leave the state untouched.
pub fn reduce(state: &mut AppState, intent: &Intent) -> Reduction {
    match intent {
        Intent::SwitchBoard { id } => {
            if !state.boards.contains(id) {
                return Reduction::Refused("unknown board");
            }
            let changed = state.active_board_id != *id;
            state.active_board_id = id.clone();
            changed_if(changed)
        }
        Intent::AddBoard { id, title } => {
            let Some(title) = normalize_board_title(title) else {
                return Reduction::Refused("empty board title");
            };
            if !state.boards.insert(Board {
                id: id.clone(),
                title,
            }) {
                return Reduction::Refused("duplicate board id");
            }
            state.active_board_id = id.clone();
            Reduction::Changed
        }
        Intent::DeleteBoard { id } => {
            if !can_delete_board(&state.boards, &state.active_board_id, id) {
                return Reduction::Refused("board cannot be deleted");
            }
            state.boards.remove(id);
            Reduction::Changed
        }
        Intent::UpdateBoardTitle { id, title } => {
            let Some(current) = state.boards.get(id).map(|board| board.title.clone()) else {
                return Reduction::Refused("unknown board");
            };
            match title_commit(&current, title) {
                Some(next) => changed_if(state.boards.rename(id, next)),
                None => Reduction::Unchanged,
            }
        }
        Intent::SetViewMode(view) => {
            let changed = state.view_mode != *view;
            state.view_mode = *view;
            changed_if(changed)
        }

        Intent::TogglePomodoroTimer => {
            state.pomodoro.toggle();
            Reduction::Changed
        }
        Intent::ResetPomodoroTimer => {
            state.pomodoro.reset();
            Reduction::Changed
        }
        Intent::SkipPomodoroMode => {
            state.pomodoro.skip();
            Reduction::Changed
        }
        Intent::SetPomodoroMode(mode) => {
            state.pomodoro.switch_mode(*mode);
            Reduction::Changed
        }
        Intent::TickPomodoro { now, today } => {
            let before = state.pomodoro.clone();
            if let Some(end) = state.pomodoro.tick(*today) {
                info!(finished = ?end.finished, next = ?end.next, "pomodoro phase finished");
                state.push_notification(Notification {
                    id: Uuid::new_v4(),
                    message: phase_message(end.finished),
                    is_read: false,
                    created_at: *now,
                });
            }
            changed_if(before != state.pomodoro)
        }
        Intent::UpdatePomodoroSettings(settings) => {
            state.pomodoro.apply_settings(settings.clone());
            Reduction::Changed
        }
        Intent::AddPomodoroTask { id, text } => {
            let Some(text) = normalize_task_text(text) else {
                return Reduction::Refused("empty task text");
            };
            if state.pomodoro_tasks.iter().any(|task| task.id == *id) {
                return Reduction::Refused("duplicate task id");
            }
            state.pomodoro_tasks.push(PomodoroTask {
                id: *id,
                text,
                is_completed: false,
            });
            Reduction::Changed
        }
        Intent::TogglePomodoroTask { id } => {
            match state.pomodoro_tasks.iter_mut().find(|task| task.id == *id) {
                Some(task) => {
                    task.is_completed = !task.is_completed;
                    Reduction::Changed
                }
                None => Reduction::Refused("unknown task"),
            }
        }
        Intent::DeletePomodoroTask { id } => {
            let before = state.pomodoro_tasks.len();
            state.pomodoro_tasks.retain(|task| task.id != *id);
            if state.pomodoro_tasks.len() == before {
                Reduction::Refused("unknown task")
            } else {
                Reduction::Changed
            }
        }
        Intent::SetPomodoroCurrentTask { text } => {
            let text = text.trim().to_string();
            let changed = state.pomodoro.current_task_text != text;
            state.pomodoro.current_task_text = text;
            changed_if(changed)
        }
        Intent::SetPomodoroCompactView(compact) => {
            let changed = state.pomodoro.compact_view != *compact;
            state.pomodoro.compact_view = *compact;
            changed_if(changed)
        }
        Intent::SetPomodoroPopoverOpen(open) => {
            let changed = state.pomodoro.is_popover_open != *open;
            state.pomodoro.is_popover_open = *open;
            changed_if(changed)
        }

        Intent::SetSalatLocation(location) => {
            if state.salat_location == *location {
                return Reduction::Unchanged;
            }
            state.salat_location = location.clone();
            Reduction::Changed
        }
        Intent::SetSalatTimes { location, times } => {
            if state.salat_location != *location {
                return Reduction::Refused("timings for a stale location");
            }
            let changed = state.salat_times != *times;
            state.salat_times = times.clone();
            changed_if(changed)
        }

        Intent::OpenModal(kind) => {
            let changed = state.open_modal != Some(*kind);
            state.open_modal = Some(*kind);
            changed_if(changed)
        }
        Intent::CloseModal => changed_if(state.open_modal.take().is_some()),
        Intent::MarkNotificationsRead => {
            let mut changed = false;
            for notification in state.notifications.iter_mut().filter(|n| !n.is_read) {
                notification.is_read = true;
                changed = true;
            }
            changed_if(changed)
        }

        Intent::SetTheme(theme) => {
            let changed = state.theme != *theme;
            state.theme = *theme;
            changed_if(changed)
        }
        Intent::SetPrimaryColor(color) => {
            let changed = state.primary_color != *color;
            state.primary_color = *color;
            changed_if(changed)
        }
        Intent::ToggleAutoColorChange => {
            state.auto_color_change = !state.auto_color_change;
            Reduction::Changed
        }
        Intent::SetAutoColorChangeInterval(secs) => {
            let secs = clamp_auto_color_interval(*secs);
            let changed = state.auto_color_interval_secs != secs;
            state.auto_color_interval_secs = secs;
            changed_if(changed)
        }
        Intent::SetAppViewScale(scale) => {
            let changed = state.view_scale != *scale;
            state.view_scale = *scale;
            changed_if(changed)
        }
        Intent::SaveSettings => Reduction::Unchanged,
        Intent::ResetSettings => {
            let before = state.clone();
            state.apply_persisted_settings(PersistedSettings::default());
            changed_if(before != *state)
        }
    }
}

fn phase_message(finished: PomodoroMode) -> String {
    match finished {
        PomodoroMode::Focus => "Focus session complete. Time for a break.".to_string(),
        PomodoroMode::ShortBreak | PomodoroMode::LongBreak => {
            "Break is over. Ready to focus?".to_string()
        }
    }
}

type Listener = Rc<dyn Fn(&AppState)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<u64, Listener>,
}

/// Keeps a store listener registered until dropped.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.remove(&self.id);
        }
    }
}

/// Owns the application state. Views read snapshots and send intents.
pub struct Store {
    state: AppState,
    listeners: Rc<RefCell<Listeners>>,
    sink: Option<Box<dyn SettingsSink>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Rc::new(RefCell::new(Listeners::default())),
            sink: None,
        }
    }

    /// Builds a store whose user settings come from, and are saved to, `sink`.
    pub fn with_sink(mut state: AppState, sink: Box<dyn SettingsSink>) -> Self {
        match sink.load() {
            Ok(Some(settings)) => {
                debug!("restoring saved settings");
                state.apply_persisted_settings(settings);
            }
            Ok(None) => debug!("no saved settings; using defaults"),
            Err(err) => error!(error = %err, "failed loading saved settings"),
        }
        Self {
            state,
            listeners: Rc::new(RefCell::new(Listeners::default())),
            sink: Some(sink),
        }
    }

    pub fn get_state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.insert(id, Rc::new(listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Reduction {
        let reduction = reduce(&mut self.state, &intent);
        match reduction {
            Reduction::Refused(reason) => {
                warn!(intent = intent.name(), reason, "intent refused");
            }
            _ if !intent.is_noisy() => {
                debug!(intent = intent.name(), ?reduction, "intent applied");
            }
            _ => {}
        }

        self.persist(&intent);

        if reduction == Reduction::Changed {
            self.notify();
        }
        reduction
    }

    fn persist(&self, intent: &Intent) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        let result = match intent {
            Intent::SaveSettings => sink.save(&self.state.persisted_settings()),
            Intent::ResetSettings => sink.clear(),
            _ => return,
        };
        match result {
            Ok(()) => info!(intent = intent.name(), "settings storage updated"),
            Err(err) => error!(intent = intent.name(), error = %err, "settings storage failed"),
        }
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().entries.values().cloned().collect();
        for listener in listeners {
            listener(&self.state);
        }
    }
}
