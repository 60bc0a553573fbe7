use chrono::{
  NaiveDateTime,
  Utc
};
use chrono_tz::Tz;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use hearth_core::Intent;
use hearth_core::clock::now_in_zone;
use hearth_core::theme::{
  AccentColor,
  clamp_auto_color_interval
};
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  NodeRef,
  hook,
  use_effect_with,
  use_state
};

const SECOND_MS: u32 = 1_000;

/// Calls `on_outside` for every document
/// `mousedown` that lands outside `node`.
/// The listener only exists while `open`.
#[hook]
pub fn use_outside_click(
  node: NodeRef,
  open: bool,
  on_outside: Callback<()>
) {
  use_effect_with(
    (open, node),
    move |(open, node)| {
      let listener = open.then(|| {
        let node = node.clone();
        let document =
          gloo::utils::document();
        EventListener::new(
          &document,
          "mousedown",
          move |event| {
            let inside = event
              .target()
              .and_then(|target| {
                target
                  .dyn_into::<web_sys::Node>()
                  .ok()
              })
              .zip(node.get())
              .is_some_and(
                |(target, root)| {
                  root.contains(Some(
                    &target
                  ))
                }
              );
            if !inside {
              on_outside.emit(());
            }
          }
        )
      });
      move || drop(listener)
    }
  );
}

/// Wall clock refreshed once a second.
#[hook]
pub fn use_now(
  zone: Option<Tz>
) -> NaiveDateTime {
  let now =
    use_state(move || now_in_zone(zone));

  {
    let now = now.clone();
    use_effect_with(zone, move |zone| {
      let zone = *zone;
      now.set(now_in_zone(zone));
      let interval =
        Interval::new(SECOND_MS, move || {
          now.set(now_in_zone(zone));
        });
      move || drop(interval)
    });
  }

  *now
}

/// Drives the store's Pomodoro countdown
/// while the timer runs.
#[hook]
pub fn use_pomodoro_ticker(
  is_active: bool,
  zone: Option<Tz>,
  dispatch: Callback<Intent>
) {
  use_effect_with(
    (is_active, zone),
    move |(is_active, zone)| {
      let zone = *zone;
      let interval = is_active.then(|| {
        Interval::new(SECOND_MS, move || {
          dispatch.emit(
            Intent::TickPomodoro {
              now:   Utc::now(),
              today: now_in_zone(zone)
                .date()
            }
          );
        })
      });
      move || drop(interval)
    }
  );
}

/// Rotates the accent colour every
/// `interval_secs` while enabled.
#[hook]
pub fn use_auto_color(
  enabled: bool,
  interval_secs: u32,
  current: AccentColor,
  dispatch: Callback<Intent>
) {
  use_effect_with(
    (enabled, interval_secs, current),
    move |(enabled, secs, current)| {
      let current = *current;
      let period_ms =
        clamp_auto_color_interval(*secs)
          .saturating_mul(SECOND_MS);
      let interval = enabled.then(|| {
        Interval::new(period_ms, move || {
          let next =
            AccentColor::random_excluding(
              current,
              js_sys::Math::random()
            );
          tracing::debug!(
            color = next.label(),
            "auto colour change"
          );
          dispatch.emit(
            Intent::SetPrimaryColor(next)
          );
        })
      });
      move || drop(interval)
    }
  );
}
