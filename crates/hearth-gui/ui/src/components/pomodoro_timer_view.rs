use hearth_core::Intent;
use hearth_core::clock::format_countdown;
use hearth_core::pomodoro::{
  SkipPrompt,
  SkipStep,
  ring_circumference,
  ring_dash_offset
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  FocusEvent,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::app::use_store;

const RING_RADIUS: f64 = 54.0;
const RING_SIZE: u32 = 140;

#[function_component(PomodoroTimerView)]
pub fn pomodoro_timer_view() -> Html {
  let store = use_store();
  let session = store.state.pomodoro.clone();
  let prompt = use_state(SkipPrompt::default);
  let task_draft = {
    let text = session.current_task_text.clone();
    use_state(move || text)
  };

  {
    let task_draft = task_draft.clone();
    use_effect_with(
      session.current_task_text.clone(),
      move |text| {
        task_draft.set(text.clone());
        || ()
      }
    );
  }

  let dispatch = store.dispatch.clone();
  let run_step = {
    let dispatch = dispatch.clone();
    move |step: SkipStep| {
      if step == SkipStep::Dispatch {
        dispatch
          .emit(Intent::SkipPomodoroMode);
      }
    }
  };

  let on_skip = {
    let prompt = prompt.clone();
    let run_step = run_step.clone();
    let is_active = session.is_active;
    Callback::from(move |_: MouseEvent| {
      let (next, step) =
        prompt.request(is_active);
      prompt.set(next);
      run_step(step);
    })
  };
  let on_skip_confirm = {
    let prompt = prompt.clone();
    let run_step = run_step.clone();
    Callback::from(move |_: MouseEvent| {
      let (next, step) = prompt.confirm();
      prompt.set(next);
      run_step(step);
    })
  };
  let on_skip_cancel = {
    let prompt = prompt.clone();
    Callback::from(move |_: MouseEvent| {
      let (next, step) = prompt.cancel();
      prompt.set(next);
      run_step(step);
    })
  };

  let on_reset = {
    let dispatch = dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch
        .emit(Intent::ResetPomodoroTimer)
    })
  };
  let on_play = {
    let dispatch = dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch
        .emit(Intent::TogglePomodoroTimer)
    })
  };

  let commit_task = {
    let dispatch = dispatch.clone();
    let task_draft = task_draft.clone();
    let current =
      session.current_task_text.clone();
    Callback::from(move |()| {
      if task_draft.trim() != current.trim()
      {
        dispatch.emit(
          Intent::SetPomodoroCurrentTask {
            text: (*task_draft).clone()
          }
        );
      }
    })
  };
  let on_task_input = {
    let task_draft = task_draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      task_draft.set(input.value());
    })
  };
  let on_task_blur = {
    let commit_task = commit_task.clone();
    Callback::from(move |_: FocusEvent| {
      commit_task.emit(())
    })
  };
  let on_task_key =
    Callback::from(move |e: KeyboardEvent| {
      if e.key() == "Enter" {
        commit_task.emit(());
      }
    });

  let circumference =
    ring_circumference(RING_RADIUS);
  let offset = ring_dash_offset(
    circumference,
    session.progress()
  );
  let center = RING_SIZE / 2;
  let color = session.mode.color_hex();

  html! {
      <div class="pomodoro-timer-view">
          <svg
              class="ring"
              width={RING_SIZE.to_string()}
              height={RING_SIZE.to_string()}
              viewBox={format!("0 0 {RING_SIZE} {RING_SIZE}")}
          >
              <circle
                  class="ring-track"
                  cx={center.to_string()}
                  cy={center.to_string()}
                  r={RING_RADIUS.to_string()}
                  fill="none"
                  stroke-width="8"
              />
              <circle
                  cx={center.to_string()}
                  cy={center.to_string()}
                  r={RING_RADIUS.to_string()}
                  fill="none"
                  stroke={color}
                  stroke-width="8"
                  stroke-linecap="round"
                  stroke-dasharray={format!("{circumference:.3}")}
                  stroke-dashoffset={format!("{offset:.3}")}
                  transform={format!("rotate(-90 {center} {center})")}
              />
              <text
                  class="ring-readout"
                  x={center.to_string()}
                  y={(center + 10).to_string()}
                  text-anchor="middle"
              >
                  { format_countdown(session.time_remaining) }
              </text>
          </svg>

          <input
              class="focus-input"
              placeholder="What are you focusing on?"
              value={(*task_draft).clone()}
              oninput={on_task_input}
              onblur={on_task_blur}
              onkeydown={on_task_key}
          />

          <div class="transport">
              <button class="btn" title="Reset" onclick={on_reset}>{ "↺" }</button>
              <button class="btn primary" onclick={on_play}>
                  { if session.is_active { "Pause" } else { "Start" } }
              </button>
              <button class="btn" title="Skip" onclick={on_skip}>{ "⏭" }</button>
          </div>
          {
              if *prompt == SkipPrompt::Confirming {
                  html! {
                      <div class="skip-confirm">
                          <span>{ "Skip this session?" }</span>
                          <button class="btn danger" onclick={on_skip_confirm}>{ "Skip" }</button>
                          <button class="btn" onclick={on_skip_cancel}>{ "Cancel" }</button>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
