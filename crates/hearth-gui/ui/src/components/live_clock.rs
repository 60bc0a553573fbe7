use chrono_tz::Tz;
use hearth_core::clock::format_clock_12h;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::app::use_now;

#[derive(Properties, PartialEq)]
pub struct LiveClockProps {
  pub zone: Option<Tz>
}

#[function_component(LiveClock)]
pub fn live_clock(
  props: &LiveClockProps
) -> Html {
  let now = use_now(props.zone);

  html! {
      <span class="clock">{ format_clock_12h(now.time()) }</span>
  }
}
