use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_width::UnicodeWidthChar;
use uuid::Uuid;

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const TASK_LABEL_COLUMNS: usize = 24;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum PomodoroMode {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
}

impl PomodoroMode {
    pub fn all() -> &'static [PomodoroMode] {
        &[
            PomodoroMode::Focus,
            PomodoroMode::ShortBreak,
            PomodoroMode::LongBreak,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            PomodoroMode::Focus => "Focus",
            PomodoroMode::ShortBreak => "Short Break",
            PomodoroMode::LongBreak => "Long Break",
        }
    }

    /// Class suffix for mode-tinted styles.
    pub fn css_key(self) -> &'static str {
        match self {
            PomodoroMode::Focus => "focus",
            PomodoroMode::ShortBreak => "short-break",
            PomodoroMode::LongBreak => "long-break",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            PomodoroMode::Focus => "#EF4444",
            PomodoroMode::ShortBreak => "#22C55E",
            PomodoroMode::LongBreak => "#3B82F6",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PomodoroSettings {
    /// Minutes.
    pub pomodoro_duration: u32,
    pub short_break_duration: u32,
    pub long_break_duration: u32,
    pub auto_start_breaks: bool,
    pub auto_start_pomodoros: bool,
    /// Focus sessions between long breaks.
    pub long_break_interval: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            pomodoro_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            auto_start_breaks: false,
            auto_start_pomodoros: false,
            long_break_interval: 4,
        }
    }
}

impl PomodoroSettings {
    pub fn minutes_for(&self, mode: PomodoroMode) -> u32 {
        match mode {
            PomodoroMode::Focus => self.pomodoro_duration,
            PomodoroMode::ShortBreak => self.short_break_duration,
            PomodoroMode::LongBreak => self.long_break_duration,
        }
    }

    pub fn seconds_for(&self, mode: PomodoroMode) -> u32 {
        clamp_minutes(self.minutes_for(mode)).saturating_mul(60)
    }

    /// Every numeric field floored at one.
    pub fn normalized(mut self) -> Self {
        self.pomodoro_duration = clamp_minutes(self.pomodoro_duration);
        self.short_break_duration = clamp_minutes(self.short_break_duration);
        self.long_break_duration = clamp_minutes(self.long_break_duration);
        self.long_break_interval = self.long_break_interval.max(1);
        self
    }
}

fn clamp_minutes(value: u32) -> u32 {
    value.max(MIN_DURATION_MINUTES)
}

/// Parses a settings-form number. Zero, negatives and garbage become 1.
pub fn clamp_duration_input(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= i64::from(MIN_DURATION_MINUTES) => {
            u32::try_from(value).unwrap_or(u32::MAX)
        }
        _ => MIN_DURATION_MINUTES,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PomodoroTask {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
}

impl PomodoroTask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_completed: false,
        }
    }
}

pub fn normalize_task_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// How a phase ended on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEnd {
    pub finished: PomodoroMode,
    pub next: PomodoroMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PomodoroSession {
    pub mode: PomodoroMode,
    pub is_active: bool,
    /// Seconds.
    pub time_remaining: u32,
    pub initial_time: u32,
    pub current_task_text: String,
    pub compact_view: bool,
    pub is_popover_open: bool,
    pub settings: PomodoroSettings,
    pub sessions_completed_today: u32,
    pub focus_seconds_today: u32,
    pub stats_date: Option<NaiveDate>,
    pub focus_sessions_in_cycle: u32,
}

impl Default for PomodoroSession {
    fn default() -> Self {
        Self::with_settings(PomodoroSettings::default())
    }
}

impl PomodoroSession {
    pub fn with_settings(settings: PomodoroSettings) -> Self {
        let settings = settings.normalized();
        let initial = settings.seconds_for(PomodoroMode::Focus);
        Self {
            mode: PomodoroMode::Focus,
            is_active: false,
            time_remaining: initial,
            initial_time: initial,
            current_task_text: String::new(),
            compact_view: false,
            is_popover_open: false,
            settings,
            sessions_completed_today: 0,
            focus_seconds_today: 0,
            stats_date: None,
            focus_sessions_in_cycle: 0,
        }
    }

    pub fn progress(&self) -> f64 {
        progress(self.initial_time, self.time_remaining)
    }

    pub fn focus_minutes_today(&self) -> u32 {
        self.focus_seconds_today / 60
    }

    /// Sets `mode` with a full countdown. Does not touch `is_active`.
    pub fn arm(&mut self, mode: PomodoroMode) {
        let seconds = self.settings.seconds_for(mode);
        self.mode = mode;
        self.initial_time = seconds;
        self.time_remaining = seconds;
    }

    pub fn reset(&mut self) {
        self.is_active = false;
        self.arm(self.mode);
    }

    pub fn switch_mode(&mut self, mode: PomodoroMode) {
        self.is_active = false;
        self.arm(mode);
    }

    pub fn toggle(&mut self) {
        if !self.is_active && self.time_remaining == 0 {
            self.arm(self.mode);
        }
        self.is_active = !self.is_active;
    }

    pub fn apply_settings(&mut self, settings: PomodoroSettings) {
        self.settings = settings.normalized();
        if !self.is_active {
            self.arm(self.mode);
        }
    }

    /// Mode that follows the current one. Completing focus counts toward
    /// the long break cycle; skipping does not.
    pub fn following_mode(&self, counted: bool) -> PomodoroMode {
        match self.mode {
            PomodoroMode::Focus => {
                let position = if counted {
                    self.focus_sessions_in_cycle + 1
                } else {
                    self.focus_sessions_in_cycle
                };
                if counted && position >= self.settings.long_break_interval.max(1) {
                    PomodoroMode::LongBreak
                } else {
                    PomodoroMode::ShortBreak
                }
            }
            PomodoroMode::ShortBreak | PomodoroMode::LongBreak => PomodoroMode::Focus,
        }
    }

    pub fn skip(&mut self) -> PomodoroMode {
        let next = self.following_mode(false);
        self.is_active = false;
        self.arm(next);
        next
    }

    fn roll_day(&mut self, today: NaiveDate) {
        if self.stats_date != Some(today) {
            if self.stats_date.is_some() {
                debug!(%today, "rolling pomodoro daily stats");
            }
            self.stats_date = Some(today);
            self.sessions_completed_today = 0;
            self.focus_seconds_today = 0;
        }
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self, today: NaiveDate) -> Option<PhaseEnd> {
        self.roll_day(today);
        if !self.is_active {
            return None;
        }

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            if self.mode == PomodoroMode::Focus {
                self.focus_seconds_today = self.focus_seconds_today.saturating_add(1);
            }
        }
        if self.time_remaining > 0 {
            return None;
        }

        let finished = self.mode;
        let next = self.following_mode(true);
        match finished {
            PomodoroMode::Focus => {
                self.sessions_completed_today += 1;
                self.focus_sessions_in_cycle = if next == PomodoroMode::LongBreak {
                    0
                } else {
                    self.focus_sessions_in_cycle + 1
                };
                self.is_active = self.settings.auto_start_breaks;
            }
            PomodoroMode::ShortBreak | PomodoroMode::LongBreak => {
                self.is_active = self.settings.auto_start_pomodoros;
            }
        }
        self.arm(next);
        Some(PhaseEnd { finished, next })
    }
}

/// Elapsed fraction of the countdown, `0.0` when nothing is armed.
pub fn progress(initial_time: u32, time_remaining: u32) -> f64 {
    if initial_time == 0 {
        return 0.0;
    }
    let remaining = time_remaining.min(initial_time);
    f64::from(initial_time - remaining) / f64::from(initial_time)
}

pub fn ring_circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// `stroke-dashoffset` for a ring whose drawn arc equals `progress`.
pub fn ring_dash_offset(circumference: f64, progress: f64) -> f64 {
    circumference * (1.0 - progress.clamp(0.0, 1.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    Unchanged,
    Immediate,
    NeedsConfirmation,
}

pub fn mode_switch(session: &PomodoroSession, target: PomodoroMode) -> ModeSwitch {
    if session.mode == target {
        ModeSwitch::Unchanged
    } else if session.is_active {
        ModeSwitch::NeedsConfirmation
    } else {
        ModeSwitch::Immediate
    }
}

/// Two-step skip interaction of the timer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPrompt {
    #[default]
    Idle,
    Confirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipStep {
    Dispatch,
    AskConfirmation,
    Nothing,
}

impl SkipPrompt {
    pub fn request(self, is_active: bool) -> (SkipPrompt, SkipStep) {
        match (self, is_active) {
            (_, false) => (SkipPrompt::Idle, SkipStep::Dispatch),
            (SkipPrompt::Idle, true) => (SkipPrompt::Confirming, SkipStep::AskConfirmation),
            (SkipPrompt::Confirming, true) => (SkipPrompt::Confirming, SkipStep::Nothing),
        }
    }

    pub fn confirm(self) -> (SkipPrompt, SkipStep) {
        match self {
            SkipPrompt::Confirming => (SkipPrompt::Idle, SkipStep::Dispatch),
            SkipPrompt::Idle => (SkipPrompt::Idle, SkipStep::Nothing),
        }
    }

    pub fn cancel(self) -> (SkipPrompt, SkipStep) {
        (SkipPrompt::Idle, SkipStep::Nothing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PomodoroTab {
    #[default]
    Timer,
    Tasks,
    Stats,
    Settings,
}

impl PomodoroTab {
    pub fn all() -> &'static [PomodoroTab] {
        &[
            PomodoroTab::Timer,
            PomodoroTab::Tasks,
            PomodoroTab::Stats,
            PomodoroTab::Settings,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            PomodoroTab::Timer => "Timer",
            PomodoroTab::Tasks => "Tasks",
            PomodoroTab::Stats => "Stats",
            PomodoroTab::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroStats {
    pub sessions_completed: u32,
    pub focus_minutes: u32,
    pub completed_tasks: usize,
    pub cycle_position: u32,
    pub cycle_length: u32,
}

impl PomodoroStats {
    /// Daily counters read as zero once `today` has moved past the day they
    /// were recorded on, even if no tick has rolled them yet.
    pub fn project(session: &PomodoroSession, tasks: &[PomodoroTask], today: NaiveDate) -> Self {
        let stale = session.stats_date.is_some_and(|date| date != today);
        Self {
            sessions_completed: if stale { 0 } else { session.sessions_completed_today },
            focus_minutes: if stale { 0 } else { session.focus_minutes_today() },
            completed_tasks: tasks.iter().filter(|task| task.is_completed).count(),
            cycle_position: session.focus_sessions_in_cycle,
            cycle_length: session.settings.long_break_interval.max(1),
        }
    }
}

/// Shortens `text` to at most `max_columns` display columns, adding an
/// ellipsis when cut.
pub fn truncate_label(text: &str, max_columns: usize) -> String {
    let text = text.trim();
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_columns {
        return text.to_string();
    }

    let budget = max_columns.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).expect("valid date")
    }

    #[test]
    fn mode_css_keys_are_kebab_case() {
        let keys: Vec<_> = PomodoroMode::all().iter().map(|mode| mode.css_key()).collect();
        assert_eq!(keys, ["focus", "short-break", "long-break"]);
    }

    #[test]
    fn half_elapsed_is_exactly_one_half() {
        assert_eq!(progress(1500, 750), 0.5);
        assert_eq!(progress(1500, 1500), 0.0);
        assert_eq!(progress(1500, 0), 1.0);
        assert_eq!(progress(0, 0), 0.0);
    }

    #[test]
    fn dash_offset_tracks_progress() {
        let circumference = 100.0;
        assert_eq!(ring_dash_offset(circumference, 0.0), 100.0);
        assert_eq!(ring_dash_offset(circumference, 0.25), 75.0);
        assert_eq!(ring_dash_offset(circumference, 1.5), 0.0);
    }

    #[test]
    fn duration_input_floors_at_one() {
        assert_eq!(clamp_duration_input("0"), 1);
        assert_eq!(clamp_duration_input("-12"), 1);
        assert_eq!(clamp_duration_input("abc"), 1);
        assert_eq!(clamp_duration_input(" 30 "), 30);
        assert_eq!(clamp_duration_input("300"), 300);
        assert_eq!(clamp_duration_input("99999999999"), u32::MAX);
    }

    #[test]
    fn long_durations_are_kept() {
        let settings = PomodoroSettings {
            pomodoro_duration: 300,
            ..PomodoroSettings::default()
        }
        .normalized();
        assert_eq!(settings.pomodoro_duration, 300);
        assert_eq!(settings.seconds_for(PomodoroMode::Focus), 18_000);
    }

    #[test]
    fn focus_completion_leads_to_breaks_and_long_break_on_interval() {
        let mut session = PomodoroSession::with_settings(PomodoroSettings {
            pomodoro_duration: 1,
            short_break_duration: 1,
            long_break_duration: 1,
            long_break_interval: 2,
            ..PomodoroSettings::default()
        });
        session.is_active = true;

        let mut ends = Vec::new();
        for _ in 0..60 {
            if let Some(end) = session.tick(day(1)) {
                ends.push(end);
            }
        }
        assert_eq!(
            ends,
            vec![PhaseEnd {
                finished: PomodoroMode::Focus,
                next: PomodoroMode::ShortBreak
            }]
        );
        assert!(!session.is_active);
        assert_eq!(session.sessions_completed_today, 1);
        assert_eq!(session.focus_minutes_today(), 1);

        session.is_active = true;
        for _ in 0..60 {
            session.tick(day(1));
        }
        assert_eq!(session.mode, PomodoroMode::Focus);

        session.is_active = true;
        let mut last = None;
        for _ in 0..60 {
            last = session.tick(day(1)).or(last);
        }
        assert_eq!(last.map(|end| end.next), Some(PomodoroMode::LongBreak));
        assert_eq!(session.focus_sessions_in_cycle, 0);
    }

    #[test]
    fn auto_start_keeps_running_into_break() {
        let mut session = PomodoroSession::with_settings(PomodoroSettings {
            pomodoro_duration: 1,
            auto_start_breaks: true,
            ..PomodoroSettings::default()
        });
        session.is_active = true;
        for _ in 0..60 {
            session.tick(day(1));
        }
        assert_eq!(session.mode, PomodoroMode::ShortBreak);
        assert!(session.is_active);
        assert_eq!(session.time_remaining, 5 * 60);
    }

    #[test]
    fn paused_tick_only_rolls_the_day() {
        let mut session = PomodoroSession::default();
        session.sessions_completed_today = 3;
        session.focus_seconds_today = 600;
        session.stats_date = Some(day(1));

        assert_eq!(session.tick(day(1)), None);
        assert_eq!(session.sessions_completed_today, 3);
        assert_eq!(session.time_remaining, 1500);

        session.tick(day(2));
        assert_eq!(session.sessions_completed_today, 0);
        assert_eq!(session.focus_seconds_today, 0);
    }

    #[test]
    fn paused_session_reads_zero_stats_on_a_later_day() {
        let mut session = PomodoroSession::default();
        session.sessions_completed_today = 4;
        session.focus_seconds_today = 6000;
        session.stats_date = Some(day(1));
        session.focus_sessions_in_cycle = 2;
        let tasks = [PomodoroTask::new("write")];

        let same_day = PomodoroStats::project(&session, &tasks, day(1));
        assert_eq!(same_day.sessions_completed, 4);
        assert_eq!(same_day.focus_minutes, 100);

        let next_day = PomodoroStats::project(&session, &tasks, day(2));
        assert_eq!(next_day.sessions_completed, 0);
        assert_eq!(next_day.focus_minutes, 0);
        assert_eq!(next_day.cycle_position, 2);
        assert_eq!(session.sessions_completed_today, 4);
    }

    #[test]
    fn skip_does_not_count_a_session() {
        let mut session = PomodoroSession::default();
        session.is_active = true;
        assert_eq!(session.skip(), PomodoroMode::ShortBreak);
        assert!(!session.is_active);
        assert_eq!(session.sessions_completed_today, 0);
        assert_eq!(session.skip(), PomodoroMode::Focus);
    }

    #[test]
    fn skip_while_active_waits_for_confirmation() {
        let (prompt, step) = SkipPrompt::Idle.request(true);
        assert_eq!(prompt, SkipPrompt::Confirming);
        assert_eq!(step, SkipStep::AskConfirmation);

        let (prompt, step) = prompt.cancel();
        assert_eq!(prompt, SkipPrompt::Idle);
        assert_eq!(step, SkipStep::Nothing);

        let (prompt, _) = prompt.request(true);
        assert_eq!(prompt.confirm(), (SkipPrompt::Idle, SkipStep::Dispatch));
        assert_eq!(SkipPrompt::Idle.request(false), (SkipPrompt::Idle, SkipStep::Dispatch));
    }

    #[test]
    fn switching_mode_while_running_needs_confirmation() {
        let mut session = PomodoroSession::default();
        assert_eq!(mode_switch(&session, PomodoroMode::Focus), ModeSwitch::Unchanged);
        assert_eq!(mode_switch(&session, PomodoroMode::LongBreak), ModeSwitch::Immediate);
        session.is_active = true;
        assert_eq!(
            mode_switch(&session, PomodoroMode::LongBreak),
            ModeSwitch::NeedsConfirmation
        );
    }

    #[test]
    fn settings_rearm_only_when_paused() {
        let mut session = PomodoroSession::default();
        session.apply_settings(PomodoroSettings {
            pomodoro_duration: 50,
            ..PomodoroSettings::default()
        });
        assert_eq!(session.time_remaining, 3000);

        session.is_active = true;
        session.apply_settings(PomodoroSettings {
            pomodoro_duration: 10,
            ..PomodoroSettings::default()
        });
        assert_eq!(session.time_remaining, 3000);
        assert_eq!(session.settings.pomodoro_duration, 10);
    }

    #[test]
    fn labels_are_truncated_by_display_width() {
        assert_eq!(truncate_label("  short  ", 24), "short");
        assert_eq!(truncate_label("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_label("日本語テキスト", 6), "日本…");
    }
}
