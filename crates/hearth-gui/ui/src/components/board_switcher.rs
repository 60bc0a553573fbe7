use hearth_core::Intent;
use hearth_core::board::{
  can_delete_board,
  normalize_board_title
};
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_node_ref,
  use_state
};

use crate::api::ui_log;
use crate::app::{
  confirm,
  use_outside_click,
  use_store
};

#[function_component(BoardSwitcher)]
pub fn board_switcher() -> Html {
  let store = use_store();
  let open = use_state(|| false);
  let creating = use_state(|| false);
  let draft = use_state(String::new);
  let node = use_node_ref();

  {
    let open = open.clone();
    let creating = creating.clone();
    use_outside_click(
      node.clone(),
      *open,
      Callback::from(move |_| {
        open.set(false);
        creating.set(false);
      })
    );
  }

  let state = store.state.clone();
  let active_label = state
    .active_board()
    .map(|board| board.title.clone())
    .unwrap_or_else(|| {
      "Boards".to_string()
    });

  let on_toggle = {
    let open = open.clone();
    Callback::from(move |_: MouseEvent| {
      open.set(!*open);
    })
  };

  let on_input = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    })
  };

  let submit = {
    let draft = draft.clone();
    let creating = creating.clone();
    let open = open.clone();
    let dispatch = store.dispatch.clone();
    Callback::from(move |()| {
      let Some(title) =
        normalize_board_title(&draft)
      else {
        return;
      };
      let id = Uuid::new_v4().to_string();
      tracing::info!(board_id = %id, %title, "creating board");
      ui_log("board.create", title.clone());
      dispatch.emit(Intent::AddBoard {
        id,
        title
      });
      draft.set(String::new());
      creating.set(false);
      open.set(false);
    })
  };

  let on_create_click = {
    let submit = submit.clone();
    Callback::from(move |_: MouseEvent| {
      submit.emit(())
    })
  };
  let on_create_key = {
    let submit = submit.clone();
    let creating = creating.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        match e.key().as_str() {
          | "Enter" => submit.emit(()),
          | "Escape" => creating.set(false),
          | _ => {}
        }
      }
    )
  };
  let on_start_create = {
    let creating = creating.clone();
    Callback::from(move |_: MouseEvent| {
      creating.set(true)
    })
  };

  html! {
      <div class="anchor board-switcher" ref={node}>
          <button class="btn" onclick={on_toggle}>
              { format!("{active_label} ▾") }
          </button>
          {
              if *open {
                  html! {
                      <div class="popover left">
                          <div class="menu-label">{ "Boards" }</div>
                          {
                              for state.boards.iter().map(|board| {
                                  let id = board.id.clone();
                                  let title = board.title.clone();
                                  let is_active = id == state.active_board_id;
                                  let deletable = can_delete_board(&state.boards, &state.active_board_id, &id);

                                  let on_select = {
                                      let id = id.clone();
                                      let open = open.clone();
                                      let dispatch = store.dispatch.clone();
                                      Callback::from(move |_: MouseEvent| {
                                          dispatch.emit(Intent::SwitchBoard { id: id.clone() });
                                          open.set(false);
                                      })
                                  };
                                  let on_delete = {
                                      let dispatch = store.dispatch.clone();
                                      Callback::from(move |e: MouseEvent| {
                                          e.stop_propagation();
                                          if !confirm(&delete_prompt(&title)) {
                                              tracing::info!(board_id = %id, "board deletion canceled");
                                              return;
                                          }
                                          ui_log("board.delete", id.clone());
                                          dispatch.emit(Intent::DeleteBoard { id: id.clone() });
                                      })
                                  };

                                  html! {
                                      <div class={if is_active { "menu-item active" } else { "menu-item" }} onclick={on_select}>
                                          <span>{ &board.title }</span>
                                          <button
                                              class="btn danger"
                                              title="Delete board"
                                              disabled={!deletable}
                                              onclick={on_delete}
                                          >
                                              { "✕" }
                                          </button>
                                      </div>
                                  }
                              })
                          }
                          <div class="menu-section">
                              {
                                  if *creating {
                                      html! {
                                          <div class="field">
                                              <input
                                                  value={(*draft).clone()}
                                                  oninput={on_input}
                                                  onkeydown={on_create_key}
                                                  placeholder="Board name"
                                              />
                                              <button
                                                  class="btn primary"
                                                  disabled={draft.trim().is_empty()}
                                                  onclick={on_create_click}
                                              >
                                                  { "Add" }
                                              </button>
                                          </div>
                                      }
                                  } else {
                                      html! {
                                          <button class="btn" onclick={on_start_create}>{ "+ New board" }</button>
                                      }
                                  }
                              }
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

fn delete_prompt(title: &str) -> String {
  format!(
    "Delete board \"{title}\"?\nThis \
     cannot be undone."
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn delete_prompt_names_the_board() {
    let prompt = delete_prompt("Errands");
    assert!(
      prompt
        .starts_with("Delete board \"Errands\"?")
    );
  }
}
