use chrono_tz::Tz;
use hearth_core::Intent;
use hearth_core::pomodoro::{
  ModeSwitch,
  PomodoroMode,
  PomodoroTab,
  mode_switch
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::{
  PomodoroSettingsView,
  PomodoroStatsView,
  PomodoroTasksView,
  PomodoroTimerView
};
use crate::app::{
  confirm,
  use_store
};

#[derive(Properties, PartialEq)]
pub struct PomodoroTimerProps {
  pub zone: Option<Tz>
}

#[function_component(PomodoroTimer)]
pub fn pomodoro_timer(
  props: &PomodoroTimerProps
) -> Html {
  let store = use_store();
  let tab = use_state(PomodoroTab::default);
  let session = store.state.pomodoro.clone();

  let on_mode = |mode: PomodoroMode| {
    let dispatch = store.dispatch.clone();
    let session = session.clone();
    Callback::from(move |_: MouseEvent| {
      match mode_switch(&session, mode) {
        | ModeSwitch::Unchanged => {}
        | ModeSwitch::Immediate => {
          dispatch.emit(
            Intent::SetPomodoroMode(mode)
          )
        }
        | ModeSwitch::NeedsConfirmation => {
          if confirm(
            "The timer is running. Switch \
             mode and reset it?"
          ) {
            dispatch.emit(
              Intent::SetPomodoroMode(mode)
            );
          } else {
            tracing::debug!(
              mode = mode.label(),
              "mode switch declined"
            );
          }
        }
      }
    })
  };

  let body = match *tab {
    | PomodoroTab::Timer => {
      html! { <PomodoroTimerView /> }
    }
    | PomodoroTab::Tasks => {
      html! { <PomodoroTasksView /> }
    }
    | PomodoroTab::Stats => {
      html! { <PomodoroStatsView zone={props.zone} /> }
    }
    | PomodoroTab::Settings => {
      html! { <PomodoroSettingsView /> }
    }
  };

  html! {
      <div class="pomodoro-timer">
          <div class="mode-bar">
              {
                  for PomodoroMode::all().iter().copied().map(|mode| html! {
                      <button
                          class={classes!("btn", format!("mode-{}", mode.css_key()), (mode == session.mode).then_some("active"))}
                          onclick={on_mode(mode)}
                      >
                          { mode.label() }
                      </button>
                  })
              }
          </div>
          { body }
          <div class="tab-bar">
              {
                  for PomodoroTab::all().iter().copied().map(|entry| {
                      let tab = tab.clone();
                      let is_active = *tab == entry;
                      html! {
                          <button
                              class={classes!("btn", is_active.then_some("active"))}
                              onclick={Callback::from(move |_: MouseEvent| tab.set(entry))}
                          >
                              { entry.label() }
                          </button>
                      }
                  })
              }
          </div>
      </div>
  }
}
