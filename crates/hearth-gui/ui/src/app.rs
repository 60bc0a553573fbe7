mod dialogs;
mod hooks;
mod store;

use chrono_tz::Tz;
use hearth_core::Intent;
use hearth_core::clock::parse_timezone;
use hearth_core::salat::SalatLocation;
use hearth_core::theme::ViewScale;
use hearth_core::view::ViewMode;
use hearth_gui_shared::UiConfigDto;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

pub use self::dialogs::{
  alert,
  confirm
};
pub use self::hooks::{
  use_now,
  use_outside_click
};
pub use self::store::use_store;
use self::hooks::{
  use_auto_color,
  use_pomodoro_ticker
};
use self::store::{
  StoreProvider,
  has_saved_settings
};
use crate::api::load_app_config;
use crate::components::{
  Header,
  ModalHost
};

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <StoreProvider>
          <Shell />
      </StoreProvider>
  }
}

#[function_component(Shell)]
fn shell() -> Html {
  let store = use_store();
  let zone = use_state(|| None::<Tz>);

  {
    let zone = zone.clone();
    let dispatch = store.dispatch.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match load_app_config().await {
            | Ok(config) => {
              zone.set(configured_zone(
                &config
              ));
              if !has_saved_settings()
                && let Some(location) =
                  configured_location(
                    &config
                  )
              {
                tracing::info!(
                  %location,
                  "using configured \
                   salat location"
                );
                dispatch.emit(
                  Intent::SetSalatLocation(
                    location
                  )
                );
              }
            }
            | Err(err) => {
              tracing::warn!(
                error = %err,
                "host config unavailable; \
                 using defaults"
              );
            }
          }
        }
      );
      || ()
    });
  }

  let state = store.state.clone();
  use_pomodoro_ticker(
    state.pomodoro.is_active,
    *zone,
    store.dispatch.clone()
  );
  use_auto_color(
    state.auto_color_change,
    state.auto_color_interval_secs,
    state.primary_color,
    store.dispatch.clone()
  );

  let class = classes!(
    "app",
    format!(
      "theme-{}",
      state.theme.as_key()
    )
  );
  let style = format!(
    "--accent:{};",
    state.primary_color.hex()
  );

  html! {
      <div class={class} style={style}>
          <Header zone={*zone} />
          <main class="app-main" style={view_scale_style(state.view_scale)}>
              <ViewPanel view={state.view_mode} />
          </main>
          <ModalHost />
      </div>
  }
}

fn configured_zone(
  config: &UiConfigDto
) -> Option<Tz> {
  let raw = config.clock_timezone.as_deref()?;
  let zone = parse_timezone(raw);
  if zone.is_none() {
    tracing::warn!(
      timezone = raw,
      "ignoring unknown clock timezone"
    );
  }
  zone
}

fn configured_location(
  config: &UiConfigDto
) -> Option<SalatLocation> {
  let city = config.default_city.trim();
  let country =
    config.default_country.trim();
  if city.is_empty() || country.is_empty()
  {
    return None;
  }
  Some(SalatLocation {
    city:    city.to_string(),
    country: country.to_string()
  })
}

/// Inline style for the main area at the
/// given scale.
fn view_scale_style(
  scale: ViewScale
) -> String {
  if !scale.is_compact() {
    return String::new();
  }
  let factor = scale.factor();
  format!(
    "transform:scale({factor});\
     width:{:.2}%;",
    100.0 / factor
  )
}

#[derive(Properties, PartialEq)]
struct ViewPanelProps {
  view: ViewMode
}

#[function_component(ViewPanel)]
fn view_panel(
  props: &ViewPanelProps
) -> Html {
  html! {
      <section class={classes!("view-panel", props.view.as_key())}>
          <h2>{ props.view.heading() }</h2>
      </section>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(
    city: &str,
    country: &str,
    timezone: Option<&str>
  ) -> UiConfigDto {
    UiConfigDto {
      default_city:    city.to_string(),
      default_country: country.to_string(),
      clock_timezone:  timezone
        .map(str::to_string)
    }
  }

  #[test]
  fn normal_scale_has_no_inline_style() {
    assert!(
      view_scale_style(ViewScale::Normal)
        .is_empty()
    );
  }

  #[test]
  fn compact_scale_shrinks_and_widens() {
    let style =
      view_scale_style(ViewScale::Compact);
    assert!(
      style.contains("scale(0.75)")
    );
    assert!(style.contains("133.33%"));
  }

  #[test]
  fn configured_location_needs_both_parts()
  {
    assert_eq!(
      configured_location(&config(
        " Istanbul ",
        "Turkey",
        None
      )),
      Some(SalatLocation {
        city:    "Istanbul".to_string(),
        country: "Turkey".to_string()
      })
    );
    assert_eq!(
      configured_location(&config(
        "Istanbul", " ", None
      )),
      None
    );
  }

  #[test]
  fn unknown_timezone_is_ignored() {
    assert_eq!(
      configured_zone(&config(
        "Cairo",
        "Egypt",
        Some("Mars/Olympus")
      )),
      None
    );
    assert_eq!(
      configured_zone(&config(
        "Cairo",
        "Egypt",
        Some("Africa/Cairo")
      )),
      Some(chrono_tz::Africa::Cairo)
    );
  }
}
