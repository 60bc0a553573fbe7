use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct SalatTimingsArgs {
  pub city:    String,
  pub country: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct SalatTimingsDto {
  pub city:     String,
  pub country:  String,
  /// Local date the timings were
  /// fetched for, `YYYY-MM-DD`.
  pub date:     String,
  pub timings:  BTreeMap<String, String>,
  #[serde(default)]
  pub cached:   bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct UiConfigDto {
  pub default_city:    String,
  pub default_country: String,
  #[serde(default)]
  pub clock_timezone:  Option<String>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct UiLogArg {
  pub event:  String,
  pub detail: String
}
