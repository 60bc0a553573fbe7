use chrono_tz::Tz;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_node_ref,
  use_state
};

use super::SalatClock;
use crate::app::use_outside_click;

#[derive(Properties, PartialEq)]
pub struct SalatTriggerProps {
  pub zone: Option<Tz>
}

#[function_component(SalatTrigger)]
pub fn salat_trigger(
  props: &SalatTriggerProps
) -> Html {
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

  let on_toggle = {
    let open = open.clone();
    Callback::from(move |_: MouseEvent| {
      open.set(!*open)
    })
  };

  html! {
      <div class="anchor salat-trigger" ref={node}>
          <button class="btn" title="Prayer times" onclick={on_toggle}>{ "🕌" }</button>
          {
              if *open {
                  html! {
                      <div class="popover salat-popover">
                          <SalatClock zone={props.zone} />
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
