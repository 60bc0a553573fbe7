use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use chrono_tz::Tz;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info,
  warn
};

use crate::clock::parse_timezone;
use crate::salat::{
  DEFAULT_API_BASE,
  DEFAULT_METHOD,
  SalatLocation
};

pub const CONFIG_ENV: &str =
  "HEARTH_CONFIG";
pub const CONFIG_FILE_NAME: &str =
  "hearth.toml";
pub const DEFAULT_LOG_FILTER: &str =
  "info,hearth_gui_tauri=debug,\
   hearth_core=debug";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct HearthConfig {
  pub salat:   SalatConfig,
  pub clock:   ClockConfig,
  pub logging: LoggingConfig
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct SalatConfig {
  pub api_base:        String,
  pub method:          u8,
  pub default_city:    String,
  pub default_country: String,
  pub timeout_secs:    u64
}

impl Default for SalatConfig {
  fn default() -> Self {
    let location =
      SalatLocation::default();
    Self {
      api_base:        DEFAULT_API_BASE
        .to_string(),
      method:          DEFAULT_METHOD,
      default_city:    location.city,
      default_country: location.country,
      timeout_secs:    15
    }
  }
}

impl SalatConfig {
  pub fn default_location(
    &self
  ) -> SalatLocation {
    SalatLocation {
      city:    self
        .default_city
        .trim()
        .to_string(),
      country: self
        .default_country
        .trim()
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct ClockConfig {
  /// IANA zone name; local time when
  /// unset.
  pub timezone: Option<String>
}

impl ClockConfig {
  pub fn zone(&self) -> Option<Tz> {
    self
      .timezone
      .as_deref()
      .and_then(parse_timezone)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct LoggingConfig {
  pub filter:    String,
  pub directory: Option<PathBuf>
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      filter:    DEFAULT_LOG_FILTER
        .to_string(),
      directory: None
    }
  }
}

impl HearthConfig {
  /// Loads from `path`, else the
  /// `HEARTH_CONFIG` variable, else the
  /// user config directory. A missing
  /// file yields defaults.
  #[tracing::instrument]
  pub fn load(
    path: Option<&Path>
  ) -> anyhow::Result<Self> {
    let Some(path) = path
      .map(Path::to_path_buf)
      .or_else(resolve_config_path)
    else {
      warn!(
        "no config location available; \
         using defaults"
      );
      return Ok(Self::default());
    };

    if !path.is_file() {
      warn!(
        path = %path.display(),
        "config file not found; using \
         defaults"
      );
      return Ok(Self::default());
    }

    info!(path = %path.display(), "loading config");
    Self::load_file(&path)
  }

  pub fn load_file(
    path: &Path
  ) -> anyhow::Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;
    let cfg = Self::parse(&text)
      .with_context(|| {
        format!(
          "failed to parse {}",
          path.display()
        )
      })?;
    debug!(?cfg, "parsed config");
    Ok(cfg)
  }

  pub fn parse(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: Self = toml::from_str(text)
      .map_err(anyhow::Error::new)?;
    cfg.validate()?;
    Ok(cfg)
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    if let Some(zone) =
      self.clock.timezone.as_deref()
      && parse_timezone(zone).is_none()
    {
      return Err(anyhow!(
        "unknown clock timezone: {zone}"
      ));
    }
    if self.salat.api_base.trim().is_empty()
    {
      return Err(anyhow!(
        "salat.api_base cannot be empty"
      ));
    }
    if self.salat.timeout_secs == 0 {
      return Err(anyhow!(
        "salat.timeout_secs must be \
         positive"
      ));
    }
    Ok(())
  }
}

pub fn resolve_config_path()
-> Option<PathBuf> {
  if let Ok(raw) =
    std::env::var(CONFIG_ENV)
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return Some(PathBuf::from(
        trimmed
      ));
    }
  }

  dirs::config_dir().map(|dir| {
    dir
      .join("hearth")
      .join(CONFIG_FILE_NAME)
  })
}
