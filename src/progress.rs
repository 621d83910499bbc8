use crate::models::{NutritionDay, ReadingWeek, SportWeek};
use crate::slots::SlotRecord;

pub const SPORT_GOAL: u32 = 4;
pub const READING_GOAL: u32 = 7;
pub const NUTRITION_GOAL: u32 = 4;
pub const MENTAL_GOAL: u32 = 5;
pub const RELATIONSHIP_GOAL: u32 = 4;
/// Deep-work hours per week.
pub const UNI_WEEKLY_GOAL: u32 = 7;

/// `round(100 * count / goal)`. A zero goal yields 0.
pub fn ratio_percent(count: u32, goal: u32) -> u8 {
    if goal == 0 {
        return 0;
    }
    let percent = (100.0 * f64::from(count) / f64::from(goal)).round();
    percent.min(f64::from(u8::MAX)) as u8
}

/// Like [`ratio_percent`] but clamped at 100, for counters that may overshoot.
pub fn capped_percent(count: u32, goal: u32) -> u8 {
    ratio_percent(count, goal).min(100)
}

fn slot_percent<R: SlotRecord>(record: Option<&R>, goal: u32) -> u8 {
    record.map_or(0, |record| ratio_percent(record.completed(), goal))
}

pub fn sport_percent(record: Option<&SportWeek>) -> u8 {
    slot_percent(record, SPORT_GOAL)
}

pub fn reading_percent(record: Option<&ReadingWeek>) -> u8 {
    slot_percent(record, READING_GOAL)
}

pub fn nutrition_percent(record: Option<&NutritionDay>) -> u8 {
    slot_percent(record, NUTRITION_GOAL)
}

pub fn mental_percent(me_time_hours: u32) -> u8 {
    capped_percent(me_time_hours, MENTAL_GOAL)
}

pub fn relationship_percent(days_together: u32) -> u8 {
    capped_percent(days_together, RELATIONSHIP_GOAL)
}

pub fn uni_weekly_percent(sessions: u32) -> u8 {
    capped_percent(sessions, UNI_WEEKLY_GOAL)
}

pub fn deep_work_percent(actual_minutes: u32, goal_minutes: u32) -> u8 {
    capped_percent(actual_minutes, goal_minutes)
}

/// Rounded mean of the six domain percentages.
pub fn overall_score(domains: [u8; 6]) -> u8 {
    let total: u32 = domains.iter().map(|&p| u32::from(p)).sum();
    (f64::from(total) / domains.len() as f64).round() as u8
}
