use hearth_core::Intent;
use hearth_core::state::{
  ModalKind,
  Notification
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html
};

use crate::app::use_store;

#[function_component(ModalHost)]
pub fn modal_host() -> Html {
  let store = use_store();
  let Some(kind) = store.state.open_modal
  else {
    return html! {};
  };

  let on_close = {
    let dispatch = store.dispatch.clone();
    Callback::from(move |_: MouseEvent| {
      dispatch.emit(Intent::CloseModal)
    })
  };

  let content = match kind {
    | ModalKind::Notifications => {
      let on_mark_read = {
        let dispatch = store.dispatch.clone();
        Callback::from(move |_: MouseEvent| {
          dispatch.emit(
            Intent::MarkNotificationsRead
          )
        })
      };
      notification_list(
        &store.state.notifications,
        on_mark_read
      )
    }
    | ModalKind::Trash
    | ModalKind::Settings
    | ModalKind::VerseSelector => {
      html! {
          <div class="muted">{ format!("{} is not available in this build.", kind.title()) }</div>
      }
    }
  };

  html! {
      <div class="modal-backdrop" onclick={on_close.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="menu-label">{ kind.title() }</div>
              { content }
              <div class="footer">
                  <button class="btn" onclick={on_close}>{ "Close" }</button>
              </div>
          </div>
      </div>
  }
}

fn notification_list(
  notifications: &[Notification],
  on_mark_read: Callback<MouseEvent>
) -> Html {
  if notifications.is_empty() {
    return html! {
        <div class="muted">{ "Nothing new." }</div>
    };
  }
  let any_unread = notifications
    .iter()
    .any(|notification| !notification.is_read);

  html! {
      <>
          {
              for notifications.iter().rev().map(|notification| html! {
                  <div class={if notification.is_read { "menu-item muted" } else { "menu-item" }}>
                      <span>{ &notification.message }</span>
                      <span class="muted">{ notification.created_at.format("%H:%M").to_string() }</span>
                  </div>
              })
          }
          <button class="btn" disabled={!any_unread} onclick={on_mark_read}>{ "Mark all read" }</button>
      </>
  }
}
