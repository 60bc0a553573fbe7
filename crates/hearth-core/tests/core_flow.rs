use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{NaiveDate, Utc};
use hearth_core::board::{Board, Boards};
use hearth_core::pomodoro::{PomodoroMode, PomodoroSettings};
use hearth_core::salat::{SalatLocation, SalatTimes};
use hearth_core::state::{ModalKind, PersistedSettings};
use hearth_core::store::{Reduction, SettingsSink};
use hearth_core::theme::{AccentColor, Theme, ViewScale};
use hearth_core::view::ViewMode;
use hearth_core::{AppState, Intent, Store};
use uuid::Uuid;

#[derive(Clone, Default)]
struct MemorySink {
    saved: Rc<RefCell<Option<PersistedSettings>>>,
}

impl SettingsSink for MemorySink {
    fn load(&self) -> anyhow::Result<Option<PersistedSettings>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, settings: &PersistedSettings) -> anyhow::Result<()> {
        *self.saved.borrow_mut() = Some(settings.clone());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self.saved.borrow_mut() = None;
        Ok(())
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

fn tick(store: &mut Store) -> Reduction {
    store.dispatch(Intent::TickPomodoro {
        now: Utc::now(),
        today: today(),
    })
}

#[test]
fn boards_can_be_added_switched_renamed_and_deleted() {
    let mut store = Store::default();
    let first_id = store.get_state().active_board_id.clone();

    assert_eq!(
        store.dispatch(Intent::AddBoard {
            id: "b2".to_string(),
            title: "   ".to_string(),
        }),
        Reduction::Refused("empty board title")
    );

    assert_eq!(
        store.dispatch(Intent::AddBoard {
            id: "b2".to_string(),
            title: "  Side project ".to_string(),
        }),
        Reduction::Changed
    );
    assert_eq!(store.get_state().active_board_id, "b2");
    assert_eq!(
        store.get_state().active_board().map(|b| b.title.as_str()),
        Some("Side project")
    );

    assert_eq!(
        store.dispatch(Intent::DeleteBoard { id: "b2".to_string() }),
        Reduction::Refused("board cannot be deleted")
    );

    store.dispatch(Intent::SwitchBoard { id: first_id.clone() });
    assert_eq!(
        store.dispatch(Intent::UpdateBoardTitle {
            id: "b2".to_string(),
            title: "Side project".to_string(),
        }),
        Reduction::Unchanged
    );
    assert_eq!(
        store.dispatch(Intent::DeleteBoard { id: "b2".to_string() }),
        Reduction::Changed
    );
    assert_eq!(store.get_state().boards.len(), 1);

    assert_eq!(
        store.dispatch(Intent::DeleteBoard { id: first_id }),
        Reduction::Refused("board cannot be deleted")
    );
}

#[test]
fn subscribers_see_changes_until_dropped() {
    let mut store = Store::default();
    let calls = Rc::new(Cell::new(0));
    let seen_view = Rc::new(Cell::new(ViewMode::Board));

    let subscription = {
        let calls = calls.clone();
        let seen_view = seen_view.clone();
        store.subscribe(move |state: &AppState| {
            calls.set(calls.get() + 1);
            seen_view.set(state.view_mode);
        })
    };

    store.dispatch(Intent::SetViewMode(ViewMode::Finance));
    assert_eq!(calls.get(), 1);
    assert_eq!(seen_view.get(), ViewMode::Finance);

    // no-op intents do not notify
    store.dispatch(Intent::SetViewMode(ViewMode::Finance));
    assert_eq!(calls.get(), 1);

    drop(subscription);
    store.dispatch(Intent::SetViewMode(ViewMode::Notes));
    assert_eq!(calls.get(), 1);
}

#[test]
fn pomodoro_runs_through_a_focus_session() {
    let mut store = Store::default();
    store.dispatch(Intent::UpdatePomodoroSettings(PomodoroSettings {
        pomodoro_duration: 1,
        ..PomodoroSettings::default()
    }));
    assert_eq!(store.get_state().pomodoro.time_remaining, 60);

    store.dispatch(Intent::TogglePomodoroTimer);
    assert!(store.get_state().pomodoro.is_active);
    for _ in 0..30 {
        tick(&mut store);
    }
    assert_eq!(store.get_state().pomodoro.progress(), 0.5);

    for _ in 0..30 {
        tick(&mut store);
    }
    let state = store.get_state();
    assert_eq!(state.pomodoro.mode, PomodoroMode::ShortBreak);
    assert!(!state.pomodoro.is_active);
    assert_eq!(state.pomodoro.sessions_completed_today, 1);
    assert_eq!(state.unread_notifications(), 1);

    store.dispatch(Intent::MarkNotificationsRead);
    assert_eq!(store.get_state().unread_notifications(), 0);

    assert_eq!(tick(&mut store), Reduction::Unchanged);
}

#[test]
fn switching_mode_resets_the_countdown() {
    let mut store = Store::default();
    store.dispatch(Intent::TogglePomodoroTimer);
    tick(&mut store);
    assert_eq!(store.get_state().pomodoro.time_remaining, 1499);

    store.dispatch(Intent::SetPomodoroMode(PomodoroMode::LongBreak));
    let session = &store.get_state().pomodoro;
    assert_eq!(session.mode, PomodoroMode::LongBreak);
    assert!(!session.is_active);
    assert_eq!(session.time_remaining, 15 * 60);

    store.dispatch(Intent::ResetPomodoroTimer);
    assert_eq!(store.get_state().pomodoro.initial_time, 15 * 60);
}

#[test]
fn pomodoro_tasks_are_managed_in_order() {
    let mut store = Store::default();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    store.dispatch(Intent::AddPomodoroTask {
        id: first,
        text: " write report ".to_string(),
    });
    store.dispatch(Intent::AddPomodoroTask {
        id: second,
        text: "review".to_string(),
    });
    assert_eq!(
        store.dispatch(Intent::AddPomodoroTask {
            id: Uuid::new_v4(),
            text: "  ".to_string(),
        }),
        Reduction::Refused("empty task text")
    );

    store.dispatch(Intent::TogglePomodoroTask { id: first });
    store.dispatch(Intent::SetPomodoroCurrentTask {
        text: "review".to_string(),
    });
    store.dispatch(Intent::DeletePomodoroTask { id: second });

    let state = store.get_state();
    assert_eq!(state.pomodoro_tasks.len(), 1);
    assert_eq!(state.pomodoro_tasks[0].text, "write report");
    assert!(state.pomodoro_tasks[0].is_completed);
    assert_eq!(state.pomodoro.current_task_text, "review");
}

#[test]
fn salat_times_for_a_stale_location_are_refused() {
    let mut store = Store::default();
    let cairo = SalatLocation::default();
    let mecca = SalatLocation {
        city: "Mecca".to_string(),
        country: "Saudi Arabia".to_string(),
    };
    let times: SalatTimes = [("Fajr".to_string(), "04:40".to_string())]
        .into_iter()
        .collect();

    store.dispatch(Intent::SetSalatLocation(mecca.clone()));
    assert_eq!(
        store.dispatch(Intent::SetSalatTimes {
            location: cairo,
            times: times.clone(),
        }),
        Reduction::Refused("timings for a stale location")
    );
    assert!(store.get_state().salat_times.is_empty());

    store.dispatch(Intent::SetSalatTimes {
        location: mecca,
        times,
    });
    assert_eq!(store.get_state().salat_times.len(), 1);
}

#[test]
fn settings_are_saved_restored_and_reset() {
    let sink = MemorySink::default();
    let mut store = Store::with_sink(AppState::default(), Box::new(sink.clone()));

    store.dispatch(Intent::SetTheme(Theme::Sepia));
    store.dispatch(Intent::SetPrimaryColor(AccentColor::Teal));
    store.dispatch(Intent::SetAppViewScale(ViewScale::Compact));
    store.dispatch(Intent::SetAutoColorChangeInterval(500));
    assert_eq!(store.get_state().auto_color_interval_secs, 180);
    assert!(sink.saved.borrow().is_none());

    store.dispatch(Intent::SaveSettings);
    let saved = sink.saved.borrow().clone().expect("settings saved");
    assert_eq!(saved.theme, Theme::Sepia);
    assert_eq!(saved.primary_color, AccentColor::Teal);

    let restored = Store::with_sink(AppState::default(), Box::new(sink.clone()));
    assert_eq!(restored.get_state().theme, Theme::Sepia);
    assert_eq!(restored.get_state().view_scale, ViewScale::Compact);

    store.dispatch(Intent::ResetSettings);
    assert_eq!(store.get_state().theme, Theme::default());
    assert!(sink.saved.borrow().is_none());
}

#[test]
fn modals_open_one_at_a_time() {
    let mut store = Store::default();
    store.dispatch(Intent::OpenModal(ModalKind::Trash));
    store.dispatch(Intent::OpenModal(ModalKind::Settings));
    assert_eq!(store.get_state().open_modal, Some(ModalKind::Settings));
    store.dispatch(Intent::CloseModal);
    assert_eq!(store.get_state().open_modal, None);
    assert_eq!(store.dispatch(Intent::CloseModal), Reduction::Unchanged);
}

#[test]
fn single_board_store_notifies_on_each_toggle() {
    let mut store = Store::new(AppState {
        boards: Boards::new(vec![Board {
            id: "only".to_string(),
            title: "Only".to_string(),
        }]),
        active_board_id: "only".to_string(),
        ..AppState::default()
    });
    let hits = Rc::new(Cell::new(0));
    let _subscription = {
        let hits = hits.clone();
        store.subscribe(move |_| hits.set(hits.get() + 1))
    };
    store.dispatch(Intent::ToggleAutoColorChange);
    store.dispatch(Intent::ToggleAutoColorChange);
    assert_eq!(hits.get(), 2);
    assert!(!store.get_state().auto_color_change);
}
