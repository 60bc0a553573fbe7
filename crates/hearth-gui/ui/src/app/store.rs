use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{
  Context,
  anyhow
};
use hearth_core::state::PersistedSettings;
use hearth_core::store::SettingsSink;
use hearth_core::{
  AppState,
  Intent,
  Store
};
use yew::{
  Callback,
  Children,
  ContextProvider,
  Html,
  Properties,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_state
};

pub const SETTINGS_STORAGE_KEY: &str =
  "hearth.settings.v1";

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

pub fn has_saved_settings() -> bool {
  local_storage()
    .and_then(|storage| {
      storage
        .get_item(SETTINGS_STORAGE_KEY)
        .ok()
        .flatten()
    })
    .is_some()
}

/// Settings persisted as JSON in
/// `localStorage`.
pub struct LocalStorageSink;

impl SettingsSink for LocalStorageSink {
  fn load(
    &self
  ) -> anyhow::Result<Option<PersistedSettings>>
  {
    let Some(storage) = local_storage()
    else {
      return Ok(None);
    };
    let raw = storage
      .get_item(SETTINGS_STORAGE_KEY)
      .map_err(|e| {
        anyhow!(
          "failed reading settings: \
           {e:?}"
        )
      })?;
    raw
      .map(|raw| {
        decode_settings(&raw)
      })
      .transpose()
  }

  fn save(
    &self,
    settings: &PersistedSettings
  ) -> anyhow::Result<()> {
    let storage = local_storage()
      .ok_or_else(|| {
        anyhow!(
          "localStorage is unavailable"
        )
      })?;
    let raw = encode_settings(settings)?;
    storage
      .set_item(
        SETTINGS_STORAGE_KEY,
        &raw
      )
      .map_err(|e| {
        anyhow!(
          "failed writing settings: \
           {e:?}"
        )
      })
  }

  fn clear(&self) -> anyhow::Result<()> {
    let Some(storage) = local_storage()
    else {
      return Ok(());
    };
    storage
      .remove_item(SETTINGS_STORAGE_KEY)
      .map_err(|e| {
        anyhow!(
          "failed clearing settings: \
           {e:?}"
        )
      })
  }
}

fn encode_settings(
  settings: &PersistedSettings
) -> anyhow::Result<String> {
  serde_json::to_string(settings)
    .context("failed encoding settings")
}

fn decode_settings(
  raw: &str
) -> anyhow::Result<PersistedSettings> {
  serde_json::from_str(raw).context(
    "stored settings are not valid JSON"
  )
}

/// What every component gets from
/// [`StoreProvider`]: the latest snapshot
/// and the intent channel.
#[derive(Clone)]
pub struct StoreContext {
  pub state:    Rc<AppState>,
  pub dispatch: Callback<Intent>
}

impl PartialEq for StoreContext {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.state, &other.state)
      && self.dispatch == other.dispatch
  }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
  #[prop_or_default]
  pub children: Children
}

#[function_component(StoreProvider)]
pub fn store_provider(
  props: &StoreProviderProps
) -> Html {
  let store: Rc<RefCell<Store>> =
    use_mut_ref(|| {
      Store::with_sink(
        AppState::default(),
        Box::new(LocalStorageSink)
      )
    });
  let snapshot = {
    let store = store.clone();
    use_state(move || {
      Rc::new(
        store.borrow().get_state().clone()
      )
    })
  };

  {
    let store = store.clone();
    let setter = snapshot.setter();
    use_effect_with((), move |_| {
      let subscription =
        store.borrow().subscribe(
          move |state| {
            setter
              .set(Rc::new(state.clone()));
          }
        );
      tracing::debug!("store provider subscribed");
      move || drop(subscription)
    });
  }

  let dispatch = {
    let store = store.clone();
    use_memo((), move |_| {
      Callback::from(
        move |intent: Intent| {
          match store.try_borrow_mut() {
            | Ok(mut store) => {
              store.dispatch(intent);
            }
            | Err(_) => {
              tracing::error!(
                intent = intent.name(),
                "store is busy; intent \
                 dropped"
              );
            }
          }
        }
      )
    })
  };

  let context = StoreContext {
    state:    (*snapshot).clone(),
    dispatch: (*dispatch).clone()
  };

  html! {
      <ContextProvider<StoreContext> context={context}>
          { props.children.clone() }
      </ContextProvider<StoreContext>>
  }
}

#[hook]
pub fn use_store() -> StoreContext {
  use_context::<StoreContext>().expect(
    "use_store called outside \
     StoreProvider"
  )
}

#[cfg(test)]
mod tests {
  use hearth_core::theme::Theme;

  use super::*;

  #[test]
  fn settings_survive_json_encoding() {
    let mut settings =
      PersistedSettings::default();
    settings.theme = Theme::Sepia;
    settings.pomodoro.pomodoro_duration =
      50;

    let raw = encode_settings(&settings)
      .expect("encode");
    let back =
      decode_settings(&raw).expect("decode");
    assert_eq!(back, settings);
  }

  #[test]
  fn partial_settings_fall_back_to_defaults()
  {
    let back = decode_settings(
      r#"{"theme":"light"}"#
    )
    .expect("decode");
    assert_eq!(back.theme, Theme::Light);
    assert_eq!(
      back.salat_location,
      PersistedSettings::default()
        .salat_location
    );
  }

  #[test]
  fn garbage_settings_are_an_error() {
    assert!(
      decode_settings("not json").is_err()
    );
  }
}
