use hearth_core::Intent;
use hearth_core::state::ModalKind;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html
};

use crate::app::use_store;

/// Unread badge text; nothing when all
/// notifications are read.
fn badge_label(
  unread: usize
) -> Option<String> {
  match unread {
    | 0 => None,
    | 1..=9 => Some(unread.to_string()),
    | _ => Some("9+".to_string())
  }
}

#[function_component(NotificationBell)]
pub fn notification_bell() -> Html {
  let store = use_store();
  let unread =
    store.state.unread_notifications();

  let onclick = {
    let dispatch = store.dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch.emit(Intent::OpenModal(
        ModalKind::Notifications
      ))
    })
  };

  html! {
      <button class="btn notification-bell" title="Notifications" {onclick}>
          { "🔔" }
          {
              match badge_label(unread) {
                  Some(label) => html! { <span class="badge">{ label }</span> },
                  None => html! {},
              }
          }
      </button>
  }
}
