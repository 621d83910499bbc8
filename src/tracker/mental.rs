use super::{OpResult, Rejection};
use crate::buckets::WeekKey;
use crate::models::{AppData, MentalView};
use crate::progress::{MENTAL_GOAL, mental_percent};
use chrono::NaiveDate;

pub fn view(data: &AppData, today: NaiveDate) -> MentalView {
    let week = WeekKey::from_date(today).label();
    let hours = data.mental.get(&week).map_or(0, |record| record.me_time_hours);
    MentalView {
        week,
        me_time_hours: hours,
        goal: MENTAL_GOAL,
        percent: mental_percent(hours),
    }
}

/// Adds `delta` hours of me time, never dropping below zero.
pub fn adjust_me_time(data: &mut AppData, today: NaiveDate, delta: i64) -> OpResult<MentalView> {
    if delta == 0 {
        return Err(Rejection::NoOp("nothing to change"));
    }
    let week = WeekKey::from_date(today).label();
    let current = data.mental.get(&week).map_or(0, |record| record.me_time_hours);
    if delta < 0 && current == 0 {
        return Err(Rejection::NoOp("nothing to undo"));
    }
    let record = data.mental.entry(week).or_default();
    record.me_time_hours = saturating_offset(current, delta);
    Ok(view(data, today))
}

pub(crate) fn saturating_offset(value: u32, delta: i64) -> u32 {
    let next = i64::from(value).saturating_add(delta);
    next.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    #[test]
    fn over_goal_stays_clamped() {
        let mut data = AppData::default();
        let view = adjust_me_time(&mut data, today(), 6).unwrap();
        assert_eq!(view.me_time_hours, 6);
        assert_eq!(view.percent, 100);

        let view = adjust_me_time(&mut data, today(), -1).unwrap();
        assert_eq!(view.me_time_hours, 5);
        assert_eq!(view.percent, 100);

        let view = adjust_me_time(&mut data, today(), -1).unwrap();
        assert_eq!(view.percent, 80);
    }

    #[test]
    fn never_goes_below_zero() {
        let mut data = AppData::default();
        adjust_me_time(&mut data, today(), 2).unwrap();
        let view = adjust_me_time(&mut data, today(), -10).unwrap();
        assert_eq!(view.me_time_hours, 0);
        assert_eq!(view.percent, 0);
        assert_eq!(
            adjust_me_time(&mut data, today(), -1),
            Err(Rejection::NoOp("nothing to undo"))
        );
    }

    #[test]
    fn decrement_on_empty_week_creates_nothing() {
        let mut data = AppData::default();
        assert!(adjust_me_time(&mut data, today(), -1).is_err());
        assert!(data.mental.is_empty());
        assert_eq!(view(&data, today()).me_time_hours, 0);
    }

    #[test]
    fn zero_delta_leaves_the_week_alone() {
        let mut data = AppData::default();
        assert_eq!(adjust_me_time(&mut data, today(), 0), Err(Rejection::NoOp("nothing to change")));
        assert!(data.mental.is_empty());

        adjust_me_time(&mut data, today(), 2).unwrap();
        assert!(adjust_me_time(&mut data, today(), 0).is_err());
        assert_eq!(view(&data, today()).me_time_hours, 2);
    }

    #[test]
    fn offsets_saturate() {
        assert_eq!(saturating_offset(3, -5), 0);
        assert_eq!(saturating_offset(u32::MAX, 1), u32::MAX);
        assert_eq!(saturating_offset(3, 2), 5);
    }
}
