use anyhow::Context;
use hearth_core::salat::{
  SalatLocation,
  SalatTimes,
  parse_timings_envelope,
  timings_endpoint
};
use hearth_gui_shared::{
  SalatTimingsArgs,
  SalatTimingsDto
};
use tauri::State;
use tracing::{
  error,
  info,
  instrument,
  warn
};

use super::common::err_to_string;
use crate::state::{
  AppState,
  TimingsKey
};

#[tauri::command]
#[instrument(skip(state), fields(city = %args.city, country = %args.country))]
pub async fn salat_timings(
  state: State<'_, AppState>,
  args: SalatTimingsArgs
) -> Result<SalatTimingsDto, String> {
  let location = SalatLocation {
    city:    args.city.trim().to_string(),
    country: args
      .country
      .trim()
      .to_string()
  };
  if location.city.is_empty()
    || location.country.is_empty()
  {
    return Err(
      "city and country are required"
        .to_string()
    );
  }

  let date = state.today();
  let key =
    TimingsKey::new(&location, date);
  if let Some(hit) =
    state.cached_timings(&key)
  {
    info!(%date, "serving cached prayer timings");
    return Ok(hit);
  }

  let result = fetch_timings(
    &state.client,
    &state.config.salat.api_base,
    state.config.salat.method,
    &location
  )
  .await;

  match result {
    | Ok(timings) => {
      info!(
        entries = timings.len(),
        "fetched prayer timings"
      );
      let dto = SalatTimingsDto {
        city: location.city,
        country: location.country,
        date: date
          .format("%Y-%m-%d")
          .to_string(),
        timings,
        cached: false
      };
      state.remember_timings(
        key,
        dto.clone()
      );
      Ok(dto)
    }
    | Err(err) => {
      error!(error = %err, "salat_timings command failed");
      Err(err_to_string(err))
    }
  }
}

/// GET `{api_base}/timingsByCity` for
/// one location.
async fn fetch_timings(
  client: &reqwest::Client,
  api_base: &str,
  method: u8,
  location: &SalatLocation
) -> anyhow::Result<SalatTimes> {
  let endpoint =
    timings_endpoint(api_base);
  let method = method.to_string();
  let url =
    reqwest::Url::parse_with_params(
      &endpoint,
      &[
        ("city", location.city.as_str()),
        (
          "country",
          location.country.as_str()
        ),
        ("method", method.as_str())
      ]
    )
    .with_context(|| {
      format!(
        "invalid prayer times \
         endpoint: {endpoint}"
      )
    })?;

  let response = client
    .get(url)
    .header(
      reqwest::header::ACCEPT,
      "application/json"
    )
    .send()
    .await
    .context(
      "failed requesting prayer times"
    )?;

  let status = response.status();
  let body =
    response.text().await.context(
      "failed reading prayer times \
       response body"
    )?;

  match parse_timings_envelope(&body) {
    | Ok(timings) => Ok(timings),
    | Err(err) if status.is_success() => {
      Err(anyhow::Error::new(err))
    }
    | Err(err) => {
      warn!(
        %status,
        error = %err,
        "prayer times request failed"
      );
      Err(anyhow::Error::new(err)
        .context(format!(
          "prayer times service \
           answered HTTP {status}"
        )))
    }
  }
}
