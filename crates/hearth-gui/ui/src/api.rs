use hearth_core::salat::SalatLocation;
use hearth_gui_shared::{
  SalatTimingsArgs,
  SalatTimingsDto,
  UiConfigDto,
  UiLogArg
};
use serde::{
  Serialize,
  de::DeserializeOwned
};
use tauri_wasm::{
  args,
  invoke
};

/// Commands take a single `args`
/// parameter on the host side.
#[derive(Serialize)]
struct CommandArgs<'a, A> {
  args: &'a A
}

#[derive(Serialize)]
struct NoArgs {}

pub async fn invoke_tauri<R, A>(
  cmd: &str,
  args_payload: &A
) -> Result<R, String>
where
  R: DeserializeOwned,
  A: Serialize + ?Sized
{
  let payload = args(args_payload)
    .map_err(|e| {
      format!(
        "failed to encode args: {e}"
      )
    })?;
  let value = invoke(cmd)
    .with_args(payload)
    .await
    .map_err(|e| {
      format!("invoke error: {e:?}")
    })?;

  serde_wasm_bindgen::from_value(value)
    .map_err(|e| {
      format!("decode error: {e}")
    })
}

pub async fn fetch_salat_timings(
  location: &SalatLocation
) -> Result<SalatTimingsDto, String> {
  let request = SalatTimingsArgs {
    city:    location.city.clone(),
    country: location.country.clone()
  };
  invoke_tauri(
    "salat_timings",
    &CommandArgs {
      args: &request
    }
  )
  .await
}

pub async fn load_app_config()
-> Result<UiConfigDto, String> {
  invoke_tauri("app_config", &NoArgs {})
    .await
}

/// Mirrors an interaction into the host
/// log. Failures only reach the console.
pub fn ui_log(
  event: &str,
  detail: impl Into<String>
) {
  let arg = UiLogArg {
    event:  event.to_string(),
    detail: detail.into()
  };
  wasm_bindgen_futures::spawn_local(
    async move {
      if let Err(err) =
        invoke_tauri::<(), _>(
          "ui_log",
          &CommandArgs {
            args: &arg
          }
        )
        .await
      {
        tracing::debug!(error = %err, "ui_log invoke failed");
      }
    }
  );
}
