/// Blocking `window.confirm`. Anything
/// other than an explicit OK counts as a
/// refusal.
pub fn confirm(message: &str) -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .confirm_with_message(message)
        .ok()
    })
    .unwrap_or(false)
}

pub fn alert(message: &str) {
  if let Some(window) = web_sys::window()
    && let Err(error) =
      window.alert_with_message(message)
  {
    tracing::warn!(?error, "alert dialog failed");
  }
}
