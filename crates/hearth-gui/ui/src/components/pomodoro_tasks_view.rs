use hearth_core::Intent;
use hearth_core::pomodoro::normalize_task_text;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

use crate::app::use_store;

#[function_component(PomodoroTasksView)]
pub fn pomodoro_tasks_view() -> Html {
  let store = use_store();
  let draft = use_state(String::new);
  let tasks = store.state.pomodoro_tasks.clone();
  let dispatch = store.dispatch.clone();

  let add = {
    let draft = draft.clone();
    let dispatch = dispatch.clone();
    Callback::from(move |()| {
      let Some(text) =
        normalize_task_text(&draft)
      else {
        return;
      };
      dispatch.emit(
        Intent::AddPomodoroTask {
          id: Uuid::new_v4(),
          text
        }
      );
      draft.set(String::new());
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
  let on_key = {
    let add = add.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          add.emit(());
        }
      }
    )
  };
  let on_add_click =
    Callback::from(move |_: MouseEvent| {
      add.emit(())
    });

  html! {
      <div class="pomodoro-tasks-view">
          <div class="field">
              <input
                  placeholder="Add a task"
                  value={(*draft).clone()}
                  oninput={on_input}
                  onkeydown={on_key}
              />
              <button
                  class="btn primary"
                  disabled={draft.trim().is_empty()}
                  onclick={on_add_click}
              >
                  { "Add" }
              </button>
          </div>
          {
              if tasks.is_empty() {
                  html! { <div class="muted">{ "No tasks yet." }</div> }
              } else {
                  html! {
                      <>
                          {
                              for tasks.iter().map(|task| {
                                  let id = task.id;
                                  let on_toggle = {
                                      let dispatch = dispatch.clone();
                                      Callback::from(move |_: MouseEvent| {
                                          dispatch.emit(Intent::TogglePomodoroTask { id })
                                      })
                                  };
                                  let on_focus = {
                                      let dispatch = dispatch.clone();
                                      let text = task.text.clone();
                                      Callback::from(move |_: MouseEvent| {
                                          dispatch.emit(Intent::SetPomodoroCurrentTask { text: text.clone() })
                                      })
                                  };
                                  let on_delete = {
                                      let dispatch = dispatch.clone();
                                      Callback::from(move |_: MouseEvent| {
                                          dispatch.emit(Intent::DeletePomodoroTask { id })
                                      })
                                  };
                                  html! {
                                      <div class={classes!("task-row", task.is_completed.then_some("done"))}>
                                          <input type="checkbox" checked={task.is_completed} onclick={on_toggle} />
                                          <span class="task-text">{ &task.text }</span>
                                          <button class="btn" title="Focus on this" onclick={on_focus}>{ "◎" }</button>
                                          <button class="btn danger" title="Delete" onclick={on_delete}>{ "✕" }</button>
                                      </div>
                                  }
                              })
                          }
                      </>
                  }
              }
          }
      </div>
  }
}
