use super::{OpResult, Rejection};
use crate::buckets::{WeekKey, day_key};
use crate::models::{AppData, NutritionDay, ReadingWeek, SlotsView, SportWeek};
use crate::progress::{NUTRITION_GOAL, READING_GOAL, SPORT_GOAL, ratio_percent};
use crate::slots::{self, NUTRITION_ORDER, READING_ORDER, SPORT_ORDER, SlotOrder, SlotRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn view<R: SlotRecord + Clone + Default>(
    map: &BTreeMap<String, R>,
    key: String,
    goal: u32,
) -> SlotsView<R> {
    let record = map.get(&key).cloned().unwrap_or_default();
    let completed = record.completed();
    SlotsView {
        bucket: key,
        record,
        completed,
        goal,
        percent: ratio_percent(completed, goal),
    }
}

// Records are edited as copies so a rejected call never creates an empty bucket.
fn step<R: SlotRecord + Clone + Default>(
    map: &mut BTreeMap<String, R>,
    key: String,
    order: &SlotOrder,
    forward: bool,
    goal: u32,
) -> OpResult<SlotsView<R>> {
    let mut record = map.get(&key).cloned().unwrap_or_default();
    let outcome = if forward {
        slots::quick_add(&mut record, order)
    } else {
        slots::undo(&mut record, order)
    };
    if let Some(reason) = outcome.reason() {
        return Err(Rejection::NoOp(reason));
    }
    map.insert(key.clone(), record);
    Ok(view(map, key, goal))
}

fn flip<R: SlotRecord + Clone + Default>(
    map: &mut BTreeMap<String, R>,
    key: String,
    slot: &str,
    goal: u32,
) -> OpResult<SlotsView<R>> {
    let mut record = map.get(&key).cloned().unwrap_or_default();
    if slots::toggle(&mut record, slot).is_none() {
        return Err(Rejection::Invalid("unknown slot"));
    }
    map.insert(key.clone(), record);
    Ok(view(map, key, goal))
}

fn week(today: NaiveDate) -> String {
    WeekKey::from_date(today).label()
}

pub fn sport(data: &AppData, today: NaiveDate) -> SlotsView<SportWeek> {
    view(&data.sport, week(today), SPORT_GOAL)
}

pub fn sport_toggle(data: &mut AppData, today: NaiveDate, slot: &str) -> OpResult<SlotsView<SportWeek>> {
    flip(&mut data.sport, week(today), slot, SPORT_GOAL)
}

pub fn sport_quick_add(data: &mut AppData, today: NaiveDate) -> OpResult<SlotsView<SportWeek>> {
    step(&mut data.sport, week(today), &SPORT_ORDER, true, SPORT_GOAL)
}

pub fn sport_undo(data: &mut AppData, today: NaiveDate) -> OpResult<SlotsView<SportWeek>> {
    step(&mut data.sport, week(today), &SPORT_ORDER, false, SPORT_GOAL)
}

pub fn reading(data: &AppData, today: NaiveDate) -> SlotsView<ReadingWeek> {
    view(&data.reading, week(today), READING_GOAL)
}

pub fn reading_toggle(data: &mut AppData, today: NaiveDate, slot: &str) -> OpResult<SlotsView<ReadingWeek>> {
    flip(&mut data.reading, week(today), slot, READING_GOAL)
}

pub fn reading_quick_add(data: &mut AppData, today: NaiveDate) -> OpResult<SlotsView<ReadingWeek>> {
    step(&mut data.reading, week(today), &READING_ORDER, true, READING_GOAL)
}

pub fn reading_undo(data: &mut AppData, today: NaiveDate) -> OpResult<SlotsView<ReadingWeek>> {
    step(&mut data.reading, week(today), &READING_ORDER, false, READING_GOAL)
}

pub fn nutrition(data: &AppData, today: NaiveDate) -> SlotsView<NutritionDay> {
    view(&data.nutrition, day_key(today), NUTRITION_GOAL)
}

pub fn nutrition_toggle(data: &mut AppData, today: NaiveDate, slot: &str) -> OpResult<SlotsView<NutritionDay>> {
    flip(&mut data.nutrition, day_key(today), slot, NUTRITION_GOAL)
}

pub fn nutrition_quick_add(data: &mut AppData, today: NaiveDate) -> OpResult<SlotsView<NutritionDay>> {
    step(&mut data.nutrition, day_key(today), &NUTRITION_ORDER, true, NUTRITION_GOAL)
}

pub fn nutrition_undo(data: &mut AppData, today: NaiveDate) -> OpResult<SlotsView<NutritionDay>> {
    step(&mut data.nutrition, day_key(today), &NUTRITION_ORDER, false, NUTRITION_GOAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn quick_add_creates_bucket_lazily() {
        let mut data = AppData::default();
        assert!(data.sport.is_empty());
        let view = sport_quick_add(&mut data, monday()).unwrap();
        assert_eq!(view.bucket, "2026-W43");
        assert!(view.record.gym1);
        assert_eq!(view.percent, 25);
        assert_eq!(data.sport.len(), 1);
    }

    #[test]
    fn same_week_shares_one_record() {
        let mut data = AppData::default();
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
        sport_quick_add(&mut data, monday()).unwrap();
        let view = sport_quick_add(&mut data, sunday).unwrap();
        assert_eq!(data.sport.len(), 1);
        assert_eq!(view.completed, 2);
    }

    #[test]
    fn undo_without_record_does_not_create_one() {
        let mut data = AppData::default();
        assert_eq!(
            reading_undo(&mut data, monday()),
            Err(Rejection::NoOp("nothing to undo"))
        );
        assert!(data.reading.is_empty());
    }

    #[test]
    fn quick_add_on_complete_week_is_rejected() {
        let mut data = AppData::default();
        for _ in 0..7 {
            reading_quick_add(&mut data, monday()).unwrap();
        }
        let before = data.reading.clone();
        assert_eq!(
            reading_quick_add(&mut data, monday()),
            Err(Rejection::NoOp("already complete"))
        );
        assert_eq!(data.reading, before);
        assert_eq!(reading(&data, monday()).percent, 100);
    }

    #[test]
    fn nutrition_is_bucketed_per_day() {
        let mut data = AppData::default();
        let tuesday = monday().succ_opt().unwrap();
        nutrition_quick_add(&mut data, monday()).unwrap();
        assert_eq!(nutrition(&data, tuesday).percent, 0);
        assert_eq!(nutrition(&data, monday()).percent, 25);
    }

    #[test]
    fn nutrition_undo_scenario() {
        let mut data = AppData::default();
        data.nutrition.insert(
            day_key(monday()),
            NutritionDay { protein: true, vitamins: true, water: true, sweets: false },
        );
        let view = nutrition_undo(&mut data, monday()).unwrap();
        assert!(!view.record.water);
        assert!(view.record.vitamins);
        assert_eq!(view.percent, 50);
    }

    #[test]
    fn toggle_rejects_unknown_slot() {
        let mut data = AppData::default();
        assert_eq!(
            sport_toggle(&mut data, monday(), "yoga"),
            Err(Rejection::Invalid("unknown slot"))
        );
        let view = sport_toggle(&mut data, monday(), "run2").unwrap();
        assert!(view.record.run2);
        assert_eq!(view.percent, 25);
    }
}
