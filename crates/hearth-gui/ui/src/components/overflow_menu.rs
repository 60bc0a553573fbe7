use hearth_core::Intent;
use hearth_core::state::ModalKind;
use hearth_core::theme::{
  AUTO_COLOR_INTERVAL_MAX_SECS,
  AUTO_COLOR_INTERVAL_MIN_SECS,
  AccentColor,
  Theme
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  classes,
  function_component,
  html,
  use_node_ref,
  use_state
};

use crate::api::ui_log;
use crate::app::{
  alert,
  confirm,
  use_outside_click,
  use_store
};

#[function_component(OverflowMenu)]
pub fn overflow_menu() -> Html {
  let store = use_store();
  let open = use_state(|| false);
  let node = use_node_ref();

  {
    let open = open.clone();
    use_outside_click(
      node.clone(),
      *open,
      Callback::from(move |_| {
        open.set(false)
      })
    );
  }

  let state = store.state.clone();
  let dispatch = store.dispatch.clone();

  // Emits `intent` and, when `close` is
  // set, collapses the menu.
  let action = {
    let open = open.clone();
    let dispatch = dispatch.clone();
    move |intent: Intent, close: bool| {
      let open = open.clone();
      let dispatch = dispatch.clone();
      Callback::from(move |_: MouseEvent| {
        dispatch.emit(intent.clone());
        if close {
          open.set(false);
        }
      })
    }
  };

  let on_toggle = {
    let open = open.clone();
    Callback::from(move |_: MouseEvent| {
      open.set(!*open)
    })
  };

  let on_random_color = {
    let dispatch = dispatch.clone();
    let current = state.primary_color;
    Callback::from(move |_: MouseEvent| {
      let next =
        AccentColor::random_excluding(
          current,
          js_sys::Math::random()
        );
      dispatch
        .emit(Intent::SetPrimaryColor(next));
    })
  };

  let on_interval = {
    let dispatch = dispatch.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let secs = input
        .value()
        .parse::<u32>()
        .unwrap_or(
          AUTO_COLOR_INTERVAL_MIN_SECS
        );
      dispatch.emit(
        Intent::SetAutoColorChangeInterval(
          secs
        )
      );
    })
  };

  let on_save = {
    let dispatch = dispatch.clone();
    let open = open.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch.emit(Intent::SaveSettings);
      ui_log("settings.save", "");
      open.set(false);
      alert("Settings saved.");
    })
  };

  let on_reset = {
    let dispatch = dispatch.clone();
    let open = open.clone();
    Callback::from(move |_: MouseEvent| {
      if !confirm(
        "Reset all settings to their \
         defaults?"
      ) {
        tracing::info!("settings reset canceled");
        return;
      }
      dispatch.emit(Intent::ResetSettings);
      ui_log("settings.reset", "");
      open.set(false);
    })
  };

  let compact_clock =
    state.pomodoro.compact_view;
  let compact_board =
    state.view_scale.is_compact();

  html! {
      <div class="anchor overflow-menu" ref={node}>
          <button class="btn" title="More" onclick={on_toggle}>{ "⋯" }</button>
          {
              if *open {
                  html! {
                      <div class="popover">
                          <div class="menu-label">{ "Theme" }</div>
                          {
                              for Theme::all().iter().copied().map(|theme| html! {
                                  <div
                                      class={classes!("menu-item", (theme == state.theme).then_some("active"))}
                                      onclick={action(Intent::SetTheme(theme), false)}
                                  >
                                      { theme.label() }
                                  </div>
                              })
                          }

                          <div class="menu-section">
                              <div class="menu-label">{ "Accent colour" }</div>
                              <div class="swatches">
                                  {
                                      for AccentColor::all().iter().copied().map(|color| html! {
                                          <div
                                              class={classes!("swatch", (color == state.primary_color).then_some("active"))}
                                              title={color.label()}
                                              style={format!("background:{};", color.hex())}
                                              onclick={action(Intent::SetPrimaryColor(color), false)}
                                          ></div>
                                      })
                                  }
                              </div>
                              <div class="menu-item" onclick={on_random_color}>{ "Random colour" }</div>
                              <label class="field">
                                  <span>{ "Auto change colour" }</span>
                                  <input
                                      type="checkbox"
                                      checked={state.auto_color_change}
                                      onclick={action(Intent::ToggleAutoColorChange, false)}
                                  />
                              </label>
                              {
                                  if state.auto_color_change {
                                      html! {
                                          <label class="field">
                                              <span>{ format!("Every {}s", state.auto_color_interval_secs) }</span>
                                              <input
                                                  type="range"
                                                  min={AUTO_COLOR_INTERVAL_MIN_SECS.to_string()}
                                                  max={AUTO_COLOR_INTERVAL_MAX_SECS.to_string()}
                                                  value={state.auto_color_interval_secs.to_string()}
                                                  oninput={on_interval}
                                              />
                                          </label>
                                      }
                                  } else {
                                      html! {}
                                  }
                              }
                          </div>

                          <div class="menu-section">
                              <div class="menu-item" onclick={action(Intent::OpenModal(ModalKind::VerseSelector), true)}>
                                  { "Choose verse…" }
                              </div>
                              <div class="menu-item" onclick={action(Intent::SetPomodoroCompactView(!compact_clock), false)}>
                                  <span>{ "Compact clock" }</span>
                                  <span>{ if compact_clock { "On" } else { "Off" } }</span>
                              </div>
                              <div class="menu-item" onclick={action(Intent::SetAppViewScale(state.view_scale.toggled()), false)}>
                                  <span>{ "Compact board view" }</span>
                                  <span>{ if compact_board { "On" } else { "Off" } }</span>
                              </div>
                          </div>

                          <div class="menu-section">
                              <div class="menu-item" onclick={action(Intent::OpenModal(ModalKind::Trash), true)}>{ "Trash" }</div>
                              <div class="menu-item" onclick={action(Intent::OpenModal(ModalKind::Settings), true)}>{ "Settings…" }</div>
                              <div class="menu-item" onclick={on_save}>{ "Save settings" }</div>
                              <div class="menu-item" onclick={on_reset}>{ "Reset settings" }</div>
                          </div>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
