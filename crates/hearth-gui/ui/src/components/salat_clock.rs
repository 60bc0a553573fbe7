use std::cell::RefCell;
use std::rc::Rc;

use chrono_tz::Tz;
use hearth_core::Intent;
use hearth_core::clock::{
  format_hm_12h,
  format_span_minutes,
  minute_of_day
};
use hearth_core::salat::{
  PrayerTime,
  RequestGate,
  SalatLocation,
  canonical_schedule,
  minutes_until,
  next_prayer,
  parse_location_input
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  FocusEvent,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::api::{
  fetch_salat_timings,
  ui_log
};
use crate::app::{
  use_now,
  use_store
};

#[derive(Clone, PartialEq)]
enum FetchStatus {
  Loading,
  Failed(String),
  Ready
}

/// Location input text plus the last
/// rejection shown under it.
#[derive(Clone, Debug, PartialEq)]
struct LocationField {
  text:  String,
  error: Option<String>
}

impl LocationField {
  /// Mirrors `location`. A rejection of
  /// earlier input no longer applies.
  fn synced(
    location: &SalatLocation
  ) -> Self {
    Self {
      text:  location.to_string(),
      error: None
    }
  }

  fn edited(
    &self,
    text: String
  ) -> Self {
    Self {
      text,
      error: self.error.clone()
    }
  }

  /// Field after a commit, plus the
  /// location to dispatch if it changed.
  fn commit(
    &self,
    current: &SalatLocation
  ) -> (Self, Option<SalatLocation>) {
    match parse_location_input(&self.text) {
      | Ok(next) if next == *current => {
        (Self::synced(current), None)
      }
      | Ok(next) => {
        (
          Self {
            text:  self.text.clone(),
            error: None
          },
          Some(next)
        )
      }
      | Err(err) => {
        (
          Self {
            text:  current.to_string(),
            error: Some(err.to_string())
          },
          None
        )
      }
    }
  }
}

fn countdown_label(
  next: &PrayerTime,
  now_minute: u32
) -> String {
  format!(
    "{} in {}",
    next.prayer.key(),
    format_span_minutes(minutes_until(
      next.minutes,
      now_minute
    ))
  )
}

#[derive(Properties, PartialEq)]
pub struct SalatClockProps {
  pub zone: Option<Tz>
}

#[function_component(SalatClock)]
pub fn salat_clock(
  props: &SalatClockProps
) -> Html {
  let store = use_store();
  let now = use_now(props.zone);
  let location =
    store.state.salat_location.clone();
  let status =
    use_state(|| FetchStatus::Loading);
  let gate: Rc<RefCell<RequestGate>> =
    use_mut_ref(RequestGate::default);
  let latest_location = {
    let location = location.clone();
    use_mut_ref(move || location)
  };
  *latest_location.borrow_mut() =
    location.clone();

  let field = {
    let seeded =
      LocationField::synced(&location);
    use_state(move || seeded)
  };

  {
    let status = status.clone();
    let dispatch = store.dispatch.clone();
    let field = field.clone();
    use_effect_with(
      location.clone(),
      move |location| {
        field.set(LocationField::synced(
          location
        ));
        let ticket =
          gate.borrow_mut().begin(location);
        status.set(FetchStatus::Loading);
        tracing::debug!(%location, "requesting prayer timings");

        wasm_bindgen_futures::spawn_local(
          async move {
            let result =
              fetch_salat_timings(
                &ticket.location
              )
              .await;
            let current =
              latest_location.borrow().clone();
            if !gate
              .borrow()
              .accepts(&ticket, &current)
            {
              tracing::debug!(
                requested = %ticket.location,
                %current,
                "discarding stale prayer \
                 timings"
              );
              return;
            }
            match result {
              | Ok(dto) => {
                tracing::info!(
                  location = %ticket.location,
                  cached = dto.cached,
                  "prayer timings loaded"
                );
                status.set(FetchStatus::Ready);
                dispatch.emit(
                  Intent::SetSalatTimes {
                    location: ticket
                      .location
                      .clone(),
                    times:    dto.timings
                  }
                );
              }
              | Err(err) => {
                tracing::error!(
                  location = %ticket.location,
                  error = %err,
                  "prayer timings failed"
                );
                status.set(
                  FetchStatus::Failed(err)
                );
              }
            }
          }
        );
        || ()
      }
    );
  }

  let commit = {
    let field = field.clone();
    let dispatch = store.dispatch.clone();
    let location = location.clone();
    Callback::from(move |()| {
      let (next_field, next) =
        field.commit(&location);
      if let Some(error) = &next_field.error
      {
        tracing::debug!(input = %field.text, %error, "rejected location");
      }
      field.set(next_field);
      if let Some(next) = next {
        ui_log(
          "salat.location",
          next.to_string()
        );
        dispatch.emit(
          Intent::SetSalatLocation(next)
        );
      }
    })
  };

  let on_input = {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      field.set(field.edited(input.value()));
    })
  };
  let on_blur = {
    let commit = commit.clone();
    Callback::from(move |_: FocusEvent| {
      commit.emit(())
    })
  };
  let on_submit =
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      commit.emit(());
    });

  let now_minute = minute_of_day(now.time());
  let times = &store.state.salat_times;
  let next = next_prayer(times, now_minute);

  let body = match &*status {
    | FetchStatus::Loading => {
      html! { <div class="muted">{ "Loading prayer times…" }</div> }
    }
    | FetchStatus::Failed(message) => {
      html! { <div class="salat-error">{ message.clone() }</div> }
    }
    | FetchStatus::Ready => {
      html! {
          <>
              {
                  for canonical_schedule(times).into_iter().map(|entry| {
                      let is_next = next.as_ref().is_some_and(|n| n.prayer == entry.prayer);
                      html! {
                          <div class={classes!("prayer-row", is_next.then_some("next"))}>
                              <span>{ entry.prayer.key() }</span>
                              <span>{ format_hm_12h(entry.minutes) }</span>
                          </div>
                      }
                  })
              }
              {
                  match &next {
                      Some(next) => html! {
                          <div class="muted">{ countdown_label(next, now_minute) }</div>
                      },
                      None => html! {},
                  }
              }
          </>
      }
    }
  };

  html! {
      <div class="salat-clock">
          <form onsubmit={on_submit}>
              <input
                  value={field.text.clone()}
                  placeholder="City, Country"
                  oninput={on_input}
                  onblur={on_blur}
              />
          </form>
          {
              match &field.error {
                  Some(message) => html! { <div class="field-error">{ message.clone() }</div> },
                  None => html! {},
              }
          }
          { body }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use hearth_core::salat::Prayer;

  use super::*;

  fn prayer(
    prayer: Prayer,
    minutes: u32
  ) -> PrayerTime {
    PrayerTime { prayer, minutes }
  }

  fn cairo() -> SalatLocation {
    parse_location_input("Cairo, Egypt")
      .expect("valid location")
  }

  #[test]
  fn rejected_input_restores_text_and_shows_error()
  {
    let field = LocationField::synced(
      &cairo()
    )
    .edited("Cairo".to_string());
    let (next_field, next) =
      field.commit(&cairo());
    assert_eq!(next, None);
    assert_eq!(
      next_field.text,
      "Cairo, Egypt"
    );
    assert!(next_field.error.is_some());
  }

  #[test]
  fn valid_input_yields_new_location() {
    let field = LocationField::synced(
      &cairo()
    )
    .edited("Istanbul, Turkey".to_string());
    let (next_field, next) =
      field.commit(&cairo());
    assert_eq!(
      next.map(|l| l.to_string()),
      Some("Istanbul, Turkey".to_string())
    );
    assert_eq!(next_field.error, None);
  }

  #[test]
  fn location_change_elsewhere_clears_stale_error()
  {
    let (rejected, _) =
      LocationField::synced(&cairo())
        .edited("nowhere".to_string())
        .commit(&cairo());
    assert!(rejected.error.is_some());

    let moved = parse_location_input(
      "Medina, Saudi Arabia"
    )
    .expect("valid location");
    let synced =
      LocationField::synced(&moved);
    assert_eq!(synced.error, None);
    assert_eq!(
      synced.text,
      "Medina, Saudi Arabia"
    );
  }

  #[test]
  fn countdown_counts_to_later_today() {
    assert_eq!(
      countdown_label(
        &prayer(Prayer::Asr, 16 * 60),
        13 * 60
      ),
      "Asr in 3h 00m"
    );
  }

  #[test]
  fn countdown_wraps_past_midnight() {
    assert_eq!(
      countdown_label(
        &prayer(Prayer::Fajr, 5 * 60),
        21 * 60
      ),
      "Fajr in 8h 00m"
    );
  }
}
