use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::MINUTES_PER_DAY;

pub const DEFAULT_API_BASE: &str = "https://api.aladhan.com/v1";
pub const TIMINGS_PATH: &str = "timingsByCity";
pub const DEFAULT_METHOD: u8 = 5;

/// Raw timing payload as returned by the service: prayer key to `"HH:MM"`.
/// May carry keys other than the five prayers (Sunrise, Midnight, ...).
pub type SalatTimes = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub fn all() -> &'static [Prayer] {
        &[
            Prayer::Fajr,
            Prayer::Dhuhr,
            Prayer::Asr,
            Prayer::Maghrib,
            Prayer::Isha,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|prayer| prayer.key() == key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalatLocation {
    pub city: String,
    pub country: String,
}

impl Default for SalatLocation {
    fn default() -> Self {
        Self {
            city: "Cairo".to_string(),
            country: "Egypt".to_string(),
        }
    }
}

impl fmt::Display for SalatLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Enter the location as \"City, Country\"")]
    MissingSeparator,
    #[error("City must not be empty")]
    EmptyCity,
    #[error("Country must not be empty")]
    EmptyCountry,
}

/// Splits `"City, Country"` on the first comma. Everything after the first
/// comma belongs to the country.
pub fn parse_location_input(raw: &str) -> Result<SalatLocation, LocationError> {
    let mut parts = raw.split(',');
    let city = parts.next().unwrap_or_default().trim();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        return Err(LocationError::MissingSeparator);
    }
    let country = rest.join(",").trim().to_string();

    if city.is_empty() {
        return Err(LocationError::EmptyCity);
    }
    if country.is_empty() {
        return Err(LocationError::EmptyCountry);
    }

    Ok(SalatLocation {
        city: city.to_string(),
        country,
    })
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2}):(\d{2})\b").expect("valid time-of-day pattern")
    })
}

/// Minutes since midnight for `"HH:MM"`; a trailing zone label such as
/// `" (EET)"` is ignored.
pub fn parse_time_of_day(raw: &str) -> Option<u32> {
    let captures = time_pattern().captures(raw)?;
    let hours: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = captures.get(2)?.as_str().parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTime {
    pub prayer: Prayer,
    pub minutes: u32,
}

/// The canonical prayers present in `times`, ascending by time of day.
/// Unknown keys and unparsable values are skipped.
pub fn canonical_schedule(times: &SalatTimes) -> Vec<PrayerTime> {
    let mut schedule: Vec<PrayerTime> = times
        .iter()
        .filter_map(|(key, value)| {
            let prayer = Prayer::from_key(key)?;
            let minutes = parse_time_of_day(value)?;
            Some(PrayerTime { prayer, minutes })
        })
        .collect();
    schedule.sort_by_key(|entry| (entry.minutes, entry.prayer));
    schedule
}

/// Earliest prayer strictly after `now_minute`, else the first of the day
/// (tomorrow's).
pub fn next_prayer(times: &SalatTimes, now_minute: u32) -> Option<PrayerTime> {
    let schedule = canonical_schedule(times);
    schedule
        .iter()
        .find(|entry| entry.minutes > now_minute)
        .or_else(|| schedule.first())
        .cloned()
}

/// Minutes from `now_minute` until `target_minute`, wrapping past midnight.
pub fn minutes_until(target_minute: u32, now_minute: u32) -> u32 {
    if target_minute > now_minute {
        target_minute - now_minute
    } else {
        MINUTES_PER_DAY - now_minute + target_minute
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingsError {
    #[error("prayer times service returned {code}: {message}")]
    Api { code: u16, message: String },
    #[error("malformed prayer times response: {0}")]
    Malformed(String),
    #[error("prayer times response did not include timings")]
    MissingTimings,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: BTreeMap<String, serde_json::Value>,
}

/// Decodes the timings envelope `{ code, status, data }`. On failure `data`
/// holds the message as a string.
pub fn parse_timings_envelope(body: &str) -> Result<SalatTimes, TimingsError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| TimingsError::Malformed(err.to_string()))?;

    if envelope.code != 200 {
        let message = match envelope.data {
            serde_json::Value::String(message) => message,
            _ => envelope.status.unwrap_or_else(|| "request failed".to_string()),
        };
        return Err(TimingsError::Api {
            code: envelope.code,
            message,
        });
    }

    let data: TimingsData = match envelope.data {
        serde_json::Value::Null => return Err(TimingsError::MissingTimings),
        value => serde_json::from_value(value).map_err(|_| TimingsError::MissingTimings)?,
    };

    Ok(data
        .timings
        .into_iter()
        .filter_map(|(key, value)| value.as_str().map(|text| (key, text.to_string())))
        .collect())
}

pub fn timings_endpoint(api_base: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), TIMINGS_PATH)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    pub location: SalatLocation,
}

/// Orders timing requests so that only the newest one for the location
/// still in effect is applied.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: u64,
}

impl RequestGate {
    pub fn begin(&mut self, location: &SalatLocation) -> RequestTicket {
        self.latest += 1;
        RequestTicket {
            seq: self.latest,
            location: location.clone(),
        }
    }

    pub fn accepts(&self, ticket: &RequestTicket, current: &SalatLocation) -> bool {
        ticket.seq == self.latest && &ticket.location == current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_times() -> SalatTimes {
        [
            ("Fajr", "05:00"),
            ("Dhuhr", "12:30"),
            ("Asr", "16:00"),
            ("Maghrib", "18:45"),
            ("Isha", "20:00"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn next_prayer_after_one_pm_is_asr() {
        let next = next_prayer(&sample_times(), 13 * 60).expect("a prayer");
        assert_eq!(next.prayer, Prayer::Asr);
    }

    #[test]
    fn next_prayer_wraps_to_fajr() {
        let next = next_prayer(&sample_times(), 21 * 60).expect("a prayer");
        assert_eq!(next.prayer, Prayer::Fajr);
        assert_eq!(minutes_until(next.minutes, 21 * 60), 8 * 60);
    }

    #[test]
    fn exact_prayer_minute_counts_as_passed() {
        let next = next_prayer(&sample_times(), 16 * 60).expect("a prayer");
        assert_eq!(next.prayer, Prayer::Maghrib);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut times = sample_times();
        times.insert("Sunrise".to_string(), "06:30".to_string());
        times.insert("Midnight".to_string(), "23:59".to_string());
        times.insert("Isha".to_string(), "not a time".to_string());

        let schedule = canonical_schedule(&times);
        assert_eq!(schedule.len(), 4);
        let next = next_prayer(&times, 19 * 60).expect("a prayer");
        assert_eq!(next.prayer, Prayer::Fajr);
    }

    #[test]
    fn empty_times_have_no_next_prayer() {
        assert_eq!(next_prayer(&SalatTimes::new(), 0), None);
    }

    #[test]
    fn times_with_zone_suffix_parse() {
        assert_eq!(parse_time_of_day("05:12 (EET)"), Some(312));
        assert_eq!(parse_time_of_day("24:00"), None);
        assert_eq!(parse_time_of_day("7:5"), None);
    }

    #[test]
    fn location_splits_on_first_comma() {
        let location = parse_location_input("Cairo, Egypt").expect("valid location");
        assert_eq!(location.city, "Cairo");
        assert_eq!(location.country, "Egypt");

        let location =
            parse_location_input("Washington, DC, United States").expect("valid location");
        assert_eq!(location.city, "Washington");
        assert_eq!(location.country, "DC, United States");
    }

    #[test]
    fn location_without_comma_is_rejected() {
        assert_eq!(
            parse_location_input("Cairo"),
            Err(LocationError::MissingSeparator)
        );
        assert_eq!(parse_location_input(" , Egypt"), Err(LocationError::EmptyCity));
        assert_eq!(parse_location_input("Cairo,  "), Err(LocationError::EmptyCountry));
    }

    #[test]
    fn envelope_success_yields_string_timings() {
        let body = r#"{"code":200,"status":"OK","data":{"timings":{"Fajr":"04:31","Isha":"19:02","Sunrise":"06:01"},"date":{"readable":"01 Mar 2026"}}}"#;
        let times = parse_timings_envelope(body).expect("timings");
        assert_eq!(times.get("Fajr").map(String::as_str), Some("04:31"));
        assert_eq!(times.len(), 3);
    }

    #[test]
    fn envelope_failure_surfaces_message() {
        let body = r#"{"code":400,"status":"BAD_REQUEST","data":"Unable to locate city."}"#;
        assert_eq!(
            parse_timings_envelope(body),
            Err(TimingsError::Api {
                code: 400,
                message: "Unable to locate city.".to_string()
            })
        );
        assert!(matches!(
            parse_timings_envelope("<html>"),
            Err(TimingsError::Malformed(_))
        ));
        assert_eq!(
            parse_timings_envelope(r#"{"code":200,"status":"OK","data":{}}"#),
            Err(TimingsError::MissingTimings)
        );
    }

    #[test]
    fn stale_responses_are_refused() {
        let mut gate = RequestGate::default();
        let cairo = SalatLocation::default();
        let mecca = SalatLocation {
            city: "Mecca".to_string(),
            country: "Saudi Arabia".to_string(),
        };

        let first = gate.begin(&cairo);
        let second = gate.begin(&mecca);
        assert!(!gate.accepts(&first, &mecca));
        assert!(gate.accepts(&second, &mecca));
        assert!(!gate.accepts(&second, &cairo));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            timings_endpoint("https://example.test/v1/"),
            "https://example.test/v1/timingsByCity"
        );
    }
}
