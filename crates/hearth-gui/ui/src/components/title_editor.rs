use hearth_core::Intent;
use hearth_core::board::title_commit;
use hearth_core::view::header_title;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  FocusEvent,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_mut_ref,
  use_state
};

use crate::app::use_store;

#[function_component(TitleEditor)]
pub fn title_editor() -> Html {
  let store = use_store();
  let editing = use_state(|| false);
  let draft = use_state(String::new);
  // Set by Enter / Escape so the blur that
  // follows unmounting the input is ignored.
  let settled = use_mut_ref(|| false);

  let state = store.state.clone();
  let active = state.active_board().cloned();
  let title = header_title(
    state.view_mode,
    active
      .as_ref()
      .map(|board| board.title.as_str())
  );

  let editable =
    state.view_mode.title_is_editable()
      && active.is_some();
  if !editable {
    return html! {
        <h1 class="header-title">{ title }</h1>
    };
  }
  let Some(board) = active else {
    return html! {};
  };

  let commit = {
    let draft = draft.clone();
    let editing = editing.clone();
    let dispatch = store.dispatch.clone();
    let id = board.id.clone();
    let current = board.title.clone();
    Callback::from(move |()| {
      if let Some(next) =
        title_commit(&current, &draft)
      {
        tracing::info!(board_id = %id, title = %next, "renaming board");
        dispatch.emit(
          Intent::UpdateBoardTitle {
            id:    id.clone(),
            title: next
          }
        );
      }
      editing.set(false);
    })
  };

  if !*editing {
    let on_edit = {
      let editing = editing.clone();
      let draft = draft.clone();
      let settled = settled.clone();
      let current = board.title.clone();
      Callback::from(move |_: MouseEvent| {
        *settled.borrow_mut() = false;
        draft.set(current.clone());
        editing.set(true);
      })
    };
    return html! {
        <h1 class="header-title">
            { title }
            <button class="btn" title="Rename board" onclick={on_edit}>{ "✎" }</button>
        </h1>
    };
  }

  let on_input = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    })
  };
  let on_blur = {
    let commit = commit.clone();
    let settled = settled.clone();
    Callback::from(move |_: FocusEvent| {
      if settled.replace(false) {
        return;
      }
      commit.emit(());
    })
  };
  let on_key = {
    let editing = editing.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        match e.key().as_str() {
          | "Enter" => {
            *settled.borrow_mut() = true;
            commit.emit(());
          }
          | "Escape" => {
            *settled.borrow_mut() = true;
            editing.set(false);
          }
          | _ => {}
        }
      }
    )
  };

  html! {
      <input
          class="header-title"
          value={(*draft).clone()}
          oninput={on_input}
          onblur={on_blur}
          onkeydown={on_key}
          autofocus={true}
      />
  }
}
