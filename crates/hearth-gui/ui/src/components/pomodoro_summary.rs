use chrono_tz::Tz;
use hearth_core::Intent;
use hearth_core::clock::format_countdown;
use hearth_core::pomodoro::{
  PomodoroSession,
  TASK_LABEL_COLUMNS,
  truncate_label
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_node_ref
};

use super::PomodoroTimer;
use crate::app::{
  use_outside_click,
  use_store
};

/// Current-task label for the expanded
/// summary, if any.
fn task_label(
  session: &PomodoroSession
) -> Option<String> {
  let text = session.current_task_text.trim();
  (!text.is_empty()).then(|| {
    truncate_label(text, TASK_LABEL_COLUMNS)
  })
}

#[derive(Properties, PartialEq)]
pub struct PomodoroSummaryProps {
  pub zone: Option<Tz>
}

#[function_component(PomodoroSummary)]
pub fn pomodoro_summary(
  props: &PomodoroSummaryProps
) -> Html {
  let store = use_store();
  let node = use_node_ref();
  let session = store.state.pomodoro.clone();
  let open = session.is_popover_open;

  {
    let dispatch = store.dispatch.clone();
    use_outside_click(
      node.clone(),
      open,
      Callback::from(move |_| {
        dispatch.emit(
          Intent::SetPomodoroPopoverOpen(
            false
          )
        )
      })
    );
  }

  let on_popover = {
    let dispatch = store.dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch.emit(
        Intent::SetPomodoroPopoverOpen(!open)
      )
    })
  };
  let on_play = {
    let dispatch = store.dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch
        .emit(Intent::TogglePomodoroTimer)
    })
  };

  let mode_class =
    format!("mode-{}", session.mode.css_key());
  let readout =
    format_countdown(session.time_remaining);

  let summary = if session.compact_view {
    html! {
        <button
            class={classes!("chip", "tinted", mode_class.clone())}
            title={session.mode.label()}
            onclick={on_popover}
        >
            { readout }
        </button>
    }
  } else {
    html! {
        <>
            <button class="btn" onclick={on_play}>
                { if session.is_active { "⏸" } else { "▶" } }
            </button>
            <span class={classes!("mode-icon", mode_class.clone())} title={session.mode.label()}>{ "◉" }</span>
            <button class="chip" onclick={on_popover}>{ readout }</button>
            {
                match task_label(&session) {
                    Some(label) => html! { <span class="pomodoro-task">{ label }</span> },
                    None => html! {},
                }
            }
        </>
    }
  };

  html! {
      <div class="anchor pomodoro-summary" ref={node}>
          { summary }
          {
              if open {
                  html! {
                      <div class="popover pomodoro-popover">
                          <PomodoroTimer zone={props.zone} />
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_task_has_no_label() {
    let mut session =
      PomodoroSession::default();
    session.current_task_text =
      "   ".to_string();
    assert_eq!(task_label(&session), None);
  }

  #[test]
  fn long_task_label_is_truncated() {
    let mut session =
      PomodoroSession::default();
    session.current_task_text =
      "Write the quarterly planning notes"
        .to_string();
    let label =
      task_label(&session).expect("label");
    assert!(label.ends_with('…'));
    assert!(
      label.chars().count()
        <= TASK_LABEL_COLUMNS
    );
  }
}
