use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use deunicode::deunicode;
use hearth_core::clock::now_in_zone;
use hearth_core::config::HearthConfig;
use hearth_core::salat::SalatLocation;
use hearth_gui_shared::{SalatTimingsDto, UiConfigDto};
use parking_lot::Mutex;
use tracing::{debug, instrument};

/// Day-scoped cache key; names are folded so "Düsseldorf" and
/// "dusseldorf" share an entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimingsKey {
    city: String,
    country: String,
    date: NaiveDate,
}

impl TimingsKey {
    pub fn new(location: &SalatLocation, date: NaiveDate) -> Self {
        Self {
            city: fold_name(&location.city),
            country: fold_name(&location.country),
            date,
        }
    }
}

fn fold_name(raw: &str) -> String {
    deunicode(raw.trim()).to_ascii_lowercase()
}

pub struct AppState {
    pub config: HearthConfig,
    pub client: reqwest::Client,
    timings: Mutex<BTreeMap<TimingsKey, SalatTimingsDto>>,
}

impl AppState {
    pub fn new(config: HearthConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.salat.timeout_secs))
            .build()
            .context("failed building HTTP client for prayer times")?;
        Ok(Self {
            config,
            client,
            timings: Mutex::new(BTreeMap::new()),
        })
    }

    pub fn today(&self) -> NaiveDate {
        now_in_zone(self.config.clock.zone()).date()
    }

    pub fn ui_config(&self) -> UiConfigDto {
        let location = self.config.salat.default_location();
        UiConfigDto {
            default_city: location.city,
            default_country: location.country,
            clock_timezone: self.config.clock.timezone.clone(),
        }
    }

    #[instrument(skip(self))]
    pub fn cached_timings(&self, key: &TimingsKey) -> Option<SalatTimingsDto> {
        let cache = self.timings.lock();
        cache.get(key).cloned().map(|mut dto| {
            dto.cached = true;
            dto
        })
    }

    /// Stores `dto` and drops entries from earlier days.
    pub fn remember_timings(&self, key: TimingsKey, dto: SalatTimingsDto) {
        let mut cache = self.timings.lock();
        let today = key.date;
        cache.retain(|existing, _| existing.date >= today);
        cache.insert(key, dto);
        debug!(entries = cache.len(), "cached prayer timings");
    }
}
