use chrono::{DateTime, Days, Duration, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::format::DateFormatter;
use crate::models::ScheduleWindowResponse;

pub const WINDOW_DAYS: u64 = 7;

/// Range of days handed to the schedule grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow<Tz: TimeZone> {
    pub from: DateTime<Tz>,
    pub to: DateTime<Tz>,
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Local midnight of `now`'s day. Falls forward to the first valid minute when
/// midnight is skipped by a DST transition.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    (0..MINUTES_PER_DAY)
        .find_map(|m| tz.from_local_datetime(&(midnight + Duration::minutes(m))).earliest())
        .unwrap_or_else(|| now.clone())
}

/// `from` is today's local midnight, `to` is seven calendar days later.
pub fn week_window<Tz: TimeZone>(now: &DateTime<Tz>) -> DateWindow<Tz> {
    let from = start_of_day(now);
    let to = from
        .clone()
        .checked_add_days(Days::new(WINDOW_DAYS))
        .unwrap_or_else(|| from.clone() + Duration::days(WINDOW_DAYS as i64));
    DateWindow { from, to }
}

fn to_iso<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Computes the window in the formatter's zone and renders it for the wire.
pub fn window_response<Tz: TimeZone>(
    now: DateTime<Utc>,
    formatter: &DateFormatter<Tz>,
) -> ScheduleWindowResponse {
    let window = week_window(&now.with_timezone(formatter.timezone()));
    ScheduleWindowResponse {
        from: to_iso(&window.from),
        to: to_iso(&window.to),
        from_label: formatter.render_date(&window.from),
        to_label: formatter.render_date(&window.to),
    }
}
