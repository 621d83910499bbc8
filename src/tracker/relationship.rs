use super::{OpResult, non_empty};
use crate::buckets::{WeekKey, day_key, week_days};
use crate::models::{AppData, CheckIn, RelationshipDay, RelationshipView, RelationshipWeekStats};
use crate::progress::{RELATIONSHIP_GOAL, relationship_percent};
use chrono::NaiveDate;

pub fn view(data: &AppData, today: NaiveDate) -> RelationshipView {
    let date = day_key(today);
    RelationshipView {
        today: data.relationship.get(&date).cloned().unwrap_or_default(),
        weekly: weekly_stats(data, today),
        date,
    }
}

/// Flips today's presence flag directly; no slot ordering involved.
pub fn toggle_together(data: &mut AppData, today: NaiveDate) -> RelationshipDay {
    let record = data.relationship.entry(day_key(today)).or_default();
    record.is_together = !record.is_together;
    record.clone()
}

/// A check-in implies presence, so it always sets `is_together`.
pub fn check_in(data: &mut AppData, today: NaiveDate, check_in: &CheckIn) -> OpResult<RelationshipDay> {
    let gratitude = non_empty(&check_in.gratitude, "gratitude note is empty")?;
    let record = data.relationship.entry(day_key(today)).or_default();
    record.quality_time = check_in.quality_time;
    record.communication = check_in.communication;
    record.gratitude = Some(gratitude);
    record.is_together = true;
    Ok(record.clone())
}

pub fn weekly_stats(data: &AppData, today: NaiveDate) -> RelationshipWeekStats {
    let days_together = week_days(today)
        .filter_map(|date| data.relationship.get(&day_key(date)))
        .filter(|record| record.is_together)
        .count() as u32;

    RelationshipWeekStats {
        week: WeekKey::from_date(today).label(),
        days_together,
        goal: RELATIONSHIP_GOAL,
        percent: relationship_percent(days_together),
    }
}
