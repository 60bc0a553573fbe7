use chrono_tz::Tz;
use hearth_core::clock::format_span_minutes;
use hearth_core::pomodoro::PomodoroStats;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::app::{
  use_now,
  use_store
};

#[derive(Properties, PartialEq)]
pub struct PomodoroStatsViewProps {
  pub zone: Option<Tz>
}

#[function_component(PomodoroStatsView)]
pub fn pomodoro_stats_view(
  props: &PomodoroStatsViewProps
) -> Html {
  let store = use_store();
  let today = use_now(props.zone).date();
  let stats = PomodoroStats::project(
    &store.state.pomodoro,
    &store.state.pomodoro_tasks,
    today
  );

  let stat = |label: &str, value: String| {
    html! {
        <div class="stat">
            <div class="stat-value">{ value }</div>
            <div class="muted">{ label.to_string() }</div>
        </div>
    }
  };

  html! {
      <div class="stats-grid">
          { stat("Sessions today", stats.sessions_completed.to_string()) }
          { stat("Focus time", format_span_minutes(stats.focus_minutes)) }
          { stat("Tasks done", stats.completed_tasks.to_string()) }
          { stat("Until long break", format!("{} / {}", stats.cycle_position, stats.cycle_length)) }
      </div>
  }
}
