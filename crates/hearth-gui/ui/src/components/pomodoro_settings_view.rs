use hearth_core::Intent;
use hearth_core::pomodoro::{
  PomodoroSettings,
  clamp_duration_input
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::api::ui_log;
use crate::app::{
  alert,
  use_store
};

type NumberField = fn(&mut PomodoroSettings, u32);
type FlagField = fn(&mut PomodoroSettings, bool);

/// Draft editor for the timer settings.
/// The draft lives only while this tab is
/// shown.
#[function_component(PomodoroSettingsView)]
pub fn pomodoro_settings_view() -> Html {
  let store = use_store();
  let draft = {
    let settings =
      store.state.pomodoro.settings.clone();
    use_state(move || settings)
  };

  let on_number = |apply: NumberField| {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let value =
        clamp_duration_input(&input.value());
      if input.value() != value.to_string() {
        input.set_value(&value.to_string());
      }
      let mut next = (*draft).clone();
      apply(&mut next, value);
      draft.set(next);
    })
  };
  let on_flag = |apply: FlagField| {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      apply(&mut next, input.checked());
      draft.set(next);
    })
  };

  let on_save = {
    let draft = draft.clone();
    let dispatch = store.dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      let settings = (*draft).clone();
      tracing::info!(
        focus = settings.pomodoro_duration,
        short_break =
          settings.short_break_duration,
        long_break =
          settings.long_break_duration,
        "saving pomodoro settings"
      );
      dispatch.emit(
        Intent::UpdatePomodoroSettings(
          settings
        )
      );
      ui_log("pomodoro.settings", "saved");
      alert("Pomodoro settings saved.");
    })
  };

  let number = |label: &str,
                value: u32,
                apply: NumberField| {
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <input
                type="number"
                min="1"
                value={value.to_string()}
                oninput={on_number(apply)}
            />
        </label>
    }
  };
  let flag = |label: &str,
              value: bool,
              apply: FlagField| {
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <input type="checkbox" checked={value} onchange={on_flag(apply)} />
        </label>
    }
  };

  html! {
      <div class="pomodoro-settings-view">
          { number("Focus (min)", draft.pomodoro_duration, |s, v| s.pomodoro_duration = v) }
          { number("Short break (min)", draft.short_break_duration, |s, v| s.short_break_duration = v) }
          { number("Long break (min)", draft.long_break_duration, |s, v| s.long_break_duration = v) }
          { number("Long break every", draft.long_break_interval, |s, v| s.long_break_interval = v) }
          { flag("Auto-start breaks", draft.auto_start_breaks, |s, v| s.auto_start_breaks = v) }
          { flag("Auto-start focus", draft.auto_start_pomodoros, |s, v| s.auto_start_pomodoros = v) }
          <button class="btn primary" onclick={on_save}>{ "Save" }</button>
      </div>
  }
}
