use hearth_core::Intent;
use hearth_core::view::ViewMode;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_node_ref,
  use_state
};

use crate::app::{
  use_outside_click,
  use_store
};

#[function_component(ViewSwitcher)]
pub fn view_switcher() -> Html {
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

  let current = store.state.view_mode;
  let on_toggle = {
    let open = open.clone();
    Callback::from(move |_: MouseEvent| {
      open.set(!*open)
    })
  };

  html! {
      <div class="anchor view-switcher" ref={node}>
          <button class="btn" onclick={on_toggle}>{ format!("{} ▾", current.label()) }</button>
          {
              if *open {
                  html! {
                      <div class="popover left">
                          {
                              for ViewMode::all().iter().copied().map(|view| {
                                  let open = open.clone();
                                  let dispatch = store.dispatch.clone();
                                  let onclick = Callback::from(move |_: MouseEvent| {
                                      tracing::debug!(view = view.as_key(), "switching view");
                                      dispatch.emit(Intent::SetViewMode(view));
                                      open.set(false);
                                  });
                                  html! {
                                      <div class={if view == current { "menu-item active" } else { "menu-item" }} {onclick}>
                                          { view.label() }
                                      </div>
                                  }
                              })
                          }
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
