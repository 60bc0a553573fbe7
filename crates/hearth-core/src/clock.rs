use chrono::{
  Local,
  NaiveDateTime,
  NaiveTime,
  Timelike,
  Utc
};
use chrono_tz::Tz;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time in the given zone, or
/// local time when no zone is set.
pub fn now_in_zone(
  zone: Option<Tz>
) -> NaiveDateTime {
  match zone {
    | Some(tz) => {
      Utc::now()
        .with_timezone(&tz)
        .naive_local()
    }
    | None => Local::now().naive_local()
  }
}

pub fn parse_timezone(
  raw: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  trimmed.parse::<Tz>().ok()
}

/// `hh:mm:ss AM`, zero padded.
pub fn format_clock_12h(
  time: NaiveTime
) -> String {
  let (is_pm, hour) = time.hour12();
  format!(
    "{:02}:{:02}:{:02} {}",
    hour,
    time.minute(),
    time.second(),
    if is_pm { "PM" } else { "AM" }
  )
}

/// `hh:mm AM` for prayer-time rows.
pub fn format_hm_12h(
  minutes: u32
) -> String {
  let minutes = minutes % MINUTES_PER_DAY;
  let hour24 = minutes / 60;
  let minute = minutes % 60;
  let hour12 = match hour24 % 12 {
    | 0 => 12,
    | h => h
  };
  let suffix =
    if hour24 >= 12 { "PM" } else { "AM" };
  format!(
    "{hour12:02}:{minute:02} {suffix}"
  )
}

pub fn minute_of_day(
  time: NaiveTime
) -> u32 {
  time.hour() * 60 + time.minute()
}

/// Countdown readout, `mm:ss`. Minutes are
/// not wrapped into hours.
pub fn format_countdown(
  seconds: u32
) -> String {
  format!(
    "{:02}:{:02}",
    seconds / 60,
    seconds % 60
  )
}

/// `1h 05m` / `45m` style span.
pub fn format_span_minutes(
  minutes: u32
) -> String {
  let hours = minutes / 60;
  let rest = minutes % 60;
  if hours == 0 {
    format!("{rest}m")
  } else {
    format!("{hours}h {rest:02}m")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(
    h: u32,
    m: u32,
    s: u32
  ) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s)
      .expect("valid time")
  }

  #[test]
  fn twelve_hour_clock_is_zero_padded() {
    assert_eq!(
      format_clock_12h(at(0, 5, 9)),
      "12:05:09 AM"
    );
    assert_eq!(
      format_clock_12h(at(13, 0, 0)),
      "01:00:00 PM"
    );
    assert_eq!(
      format_clock_12h(at(12, 30, 59)),
      "12:30:59 PM"
    );
  }

  #[test]
  fn countdown_renders_minutes_and_seconds(
  ) {
    assert_eq!(format_countdown(1500), "25:00");
    assert_eq!(format_countdown(61), "01:01");
    assert_eq!(format_countdown(0), "00:00");
    assert_eq!(format_countdown(6000), "100:00");
  }

  #[test]
  fn hm_formatting_wraps_at_midnight() {
    assert_eq!(format_hm_12h(0), "12:00 AM");
    assert_eq!(format_hm_12h(18 * 60 + 45), "06:45 PM");
    assert_eq!(format_hm_12h(MINUTES_PER_DAY + 5), "12:05 AM");
  }

  #[test]
  fn timezone_parsing_rejects_unknown_names(
  ) {
    assert!(parse_timezone("Africa/Cairo").is_some());
    assert!(parse_timezone("  ").is_none());
    assert!(parse_timezone("Mars/Olympus").is_none());
  }

  #[test]
  fn spans_render_hours_when_needed() {
    assert_eq!(format_span_minutes(45), "45m");
    assert_eq!(format_span_minutes(125), "2h 05m");
  }
}
