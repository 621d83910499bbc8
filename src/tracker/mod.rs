//! Read-modify-write operations over [`AppData`]. Every function takes the
//! clock as an argument; the handlers pass `Local::now()`.

pub mod habits;
pub mod journal;
pub mod mental;
pub mod notes;
pub mod relationship;
pub mod uni;

use crate::buckets::{DayBounds, WeekKey, day_key};
use crate::models::AppData;
use chrono::{DateTime, Local};
use std::fmt;

/// Why an operation left the store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Input failed validation before touching the store.
    Invalid(&'static str),
    /// The operation had nothing to do.
    NoOp(&'static str),
    NotFound(u64),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Invalid(reason) | Rejection::NoOp(reason) => f.write_str(reason),
            Rejection::NotFound(id) => write!(f, "no item with id {id}"),
        }
    }
}

pub type OpResult<T> = Result<T, Rejection>;

pub(crate) fn non_empty(text: &str, reason: &'static str) -> OpResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Rejection::Invalid(reason));
    }
    Ok(trimmed.to_string())
}

/// Clears the current week's habit buckets and today's daily buckets.
pub fn reset_current(data: &mut AppData, now: DateTime<Local>) {
    let today = now.date_naive();
    let week = WeekKey::from_date(today).label();
    let day = day_key(today);

    data.sport.remove(&week);
    data.reading.remove(&week);
    data.mental.remove(&week);
    data.nutrition.remove(&day);
    data.relationship.remove(&day);
    data.uni.remove(&day);

    let bounds = DayBounds::for_instant(&now);
    data.journal.retain(|entry| !bounds.contains(&entry.created_at));
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::models::Mood;

    #[test]
    fn reset_clears_only_current_buckets() {
        let now = monday_morning();
        let last_week = at(2026, 10, 12, 9, 0);
        let mut data = AppData::default();

        habits::sport_quick_add(&mut data, now.date_naive()).unwrap();
        habits::sport_quick_add(&mut data, last_week.date_naive()).unwrap();
        habits::nutrition_quick_add(&mut data, now.date_naive()).unwrap();
        mental::adjust_me_time(&mut data, now.date_naive(), 2).unwrap();
        journal::add_entry(&mut data, now, "today", Mood::Good).unwrap();
        journal::add_entry(&mut data, last_week, "old", Mood::Bad).unwrap();

        reset_current(&mut data, now);

        assert!(!data.sport.contains_key("2026-W43"));
        assert!(data.sport.contains_key("2026-W42"));
        assert!(data.nutrition.is_empty());
        assert!(data.mental.is_empty());
        assert_eq!(data.journal.len(), 1);
        assert_eq!(data.journal[0].content, "old");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(non_empty("  \n", "empty"), Err(Rejection::Invalid("empty")));
        assert_eq!(non_empty(" hi ", "empty"), Ok("hi".to_string()));
    }
}
