use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use std::fmt;

/// ISO-8601 week bucket. Weeks start on Monday and week 1 is the week that
/// contains the year's first Thursday, so `year` is the ISO week-year and can
/// differ from the calendar year around New Year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// One calendar day in `Tz`: `[start, next_start)`, where both ends are
/// local midnights. Daylight-saving days are 23 or 25 hours long, so the end
/// is taken from the next midnight rather than a fixed 24 hours.
#[derive(Debug, Clone)]
pub struct DayBounds<Tz: TimeZone = Local> {
    pub start: DateTime<Tz>,
    pub next_start: DateTime<Tz>,
}

impl<Tz: TimeZone> DayBounds<Tz> {
    pub fn for_instant(instant: &DateTime<Tz>) -> Self {
        let tz = instant.timezone();
        let date = instant.date_naive();
        let start = midnight(&tz, date).unwrap_or_else(|| instant.clone());
        let next_start = date
            .succ_opt()
            .and_then(|next| midnight(&tz, next))
            .unwrap_or_else(|| start.clone() + Duration::days(1));
        Self { start, next_start }
    }

    pub fn between(start: DateTime<Tz>, next_start: DateTime<Tz>) -> Self {
        Self { start, next_start }
    }

    /// Last millisecond of the day, 23:59:59.999 local time.
    pub fn end(&self) -> DateTime<Tz> {
        self.next_start.clone() - Duration::milliseconds(1)
    }

    pub fn contains<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        let at = instant.naive_utc();
        at >= self.start.naive_utc() && at < self.next_start.naive_utc()
    }
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn week_days(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let start = week_start(date);
    (0..7).map(move |offset| start + Duration::days(offset))
}

// DST transitions can make local midnight ambiguous or missing.
fn midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN)).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_key_uses_iso_week_year() {
        // 2027-01-01 is a Friday, so it still belongs to the last ISO week of 2026.
        assert_eq!(WeekKey::from_date(date(2027, 1, 1)), WeekKey { year: 2026, week: 53 });
        // 2024-12-30 is a Monday in the week holding 2025's first Thursday.
        assert_eq!(WeekKey::from_date(date(2024, 12, 30)), WeekKey { year: 2025, week: 1 });
        assert_eq!(WeekKey::from_date(date(2026, 10, 19)).label(), "2026-W43");
    }

    #[test]
    fn week_key_is_stable_within_a_week() {
        let monday = date(2026, 10, 19);
        let sunday = date(2026, 10, 25);
        assert_eq!(WeekKey::from_date(monday), WeekKey::from_date(sunday));
        assert_ne!(WeekKey::from_date(sunday), WeekKey::from_date(date(2026, 10, 26)));
    }

    #[test]
    fn week_days_start_on_monday() {
        let days: Vec<_> = week_days(date(2026, 10, 22)).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2026, 10, 19));
        assert_eq!(days[6], date(2026, 10, 25));
    }

    #[test]
    fn day_bounds_cover_the_local_day() {
        let noon = Local
            .from_local_datetime(&date(2026, 3, 10).and_hms_opt(12, 0, 0).unwrap())
            .earliest()
            .unwrap();
        let bounds = DayBounds::for_instant(&noon);
        assert_eq!(bounds.start.date_naive(), date(2026, 3, 10));
        assert_eq!(bounds.end().date_naive(), date(2026, 3, 10));
        assert!(bounds.contains(&noon));
        assert!(bounds.contains(&bounds.end()));
        assert!(!bounds.contains(&bounds.next_start));
        assert!(!bounds.contains(&(bounds.start.clone() - Duration::milliseconds(1))));
        assert_eq!(day_key(date(2026, 3, 10)), "2026-03-10");
    }

    #[test]
    fn day_bounds_follow_the_instant_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let noon = tz.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let bounds = DayBounds::for_instant(&noon);
        assert_eq!(bounds.start, tz.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(bounds.next_start, tz.with_ymd_and_hms(2026, 6, 2, 0, 0, 0).unwrap());
        assert_eq!(bounds.end().format("%H:%M:%S%.3f").to_string(), "23:59:59.999");
    }

    fn local(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    #[test]
    fn short_spring_day_ends_at_next_midnight() {
        // Europe/Berlin, 2026-03-29: midnight is +01:00, the next one +02:00.
        let bounds = DayBounds::between(local(1, 2026, 3, 29, 0, 0), local(2, 2026, 3, 30, 0, 0));
        assert!(bounds.contains(&local(2, 2026, 3, 29, 23, 30)));
        assert!(!bounds.contains(&local(2, 2026, 3, 30, 0, 30)));
        assert_eq!(bounds.end().naive_local(), date(2026, 3, 29).and_hms_milli_opt(23, 59, 59, 999).unwrap());
        assert_eq!((bounds.next_start.clone() - bounds.start.clone()).num_hours(), 23);
    }

    #[test]
    fn long_autumn_day_keeps_its_last_hour() {
        // Europe/Berlin, 2026-10-25: midnight is +02:00, the next one +01:00.
        let bounds = DayBounds::between(local(2, 2026, 10, 25, 0, 0), local(1, 2026, 10, 26, 0, 0));
        assert!(bounds.contains(&local(1, 2026, 10, 25, 23, 30)));
        assert!(!bounds.contains(&local(1, 2026, 10, 26, 0, 0)));
        assert_eq!((bounds.next_start.clone() - bounds.start.clone()).num_hours(), 25);
    }
}
