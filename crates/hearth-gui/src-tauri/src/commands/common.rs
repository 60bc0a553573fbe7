use hearth_gui_shared::{
  UiConfigDto,
  UiLogArg
};
use tauri::State;
use tracing::{
  info,
  instrument
};

use crate::state::AppState;

pub(crate) fn err_to_string(
  err: anyhow::Error
) -> String {
  format!("{err:#}")
}

#[tauri::command]
#[instrument(skip(state))]
pub async fn app_config(
  state: State<'_, AppState>
) -> Result<UiConfigDto, String> {
  Ok(state.ui_config())
}

#[tauri::command]
#[instrument(fields(event = %args.event))]
pub async fn ui_log(
  args: UiLogArg
) -> Result<(), String> {
  info!(event = %args.event, detail = %args.detail, "ui interaction");
  Ok(())
}
