use crate::buckets::{DayBounds, WeekKey, day_key};
use crate::models::{AppData, DailyPoint, DashboardSummary, Priority};
use crate::progress::{nutrition_percent, overall_score};
use crate::tracker::{habits, mental, notes, relationship, uni};
use chrono::{DateTime, Duration, Local};

pub fn build_dashboard(data: &AppData) -> DashboardSummary {
    build_dashboard_at(Local::now(), data)
}

pub fn build_dashboard_at(now: DateTime<Local>, data: &AppData) -> DashboardSummary {
    let today = now.date_naive();

    let sport = habits::sport(data, today).percent;
    let reading = habits::reading(data, today).percent;
    let nutrition = habits::nutrition(data, today).percent;
    let relationship = relationship::weekly_stats(data, today).percent;
    let mental = mental::view(data, today).percent;
    let uni = uni::weekly_stats(data, today).percent;

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = day_key(date);
        last_7_days.push(DailyPoint {
            nutrition: nutrition_percent(data.nutrition.get(&key)),
            together: data.relationship.get(&key).is_some_and(|record| record.is_together),
            deep_work_minutes: data.uni.get(&key).map_or(0, |record| record.actual_deep_work_minutes),
            date: key,
        });
    }

    let bounds = DayBounds::for_instant(&now);
    let journal_today = data
        .journal
        .iter()
        .filter(|entry| bounds.contains(&entry.created_at))
        .count();
    let open_tasks = uni::tasks_by_priority(data, Priority::Critical).len()
        + uni::tasks_by_priority(data, Priority::Important).len();

    DashboardSummary {
        date: day_key(today),
        week: WeekKey::from_date(today).label(),
        sport,
        reading,
        nutrition,
        relationship,
        mental,
        uni,
        overall: overall_score([sport, reading, nutrition, relationship, mental, uni]),
        journal_today,
        open_tasks,
        open_notes: notes::open_notes(data).len(),
        last_7_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mood, NewTask};
    use crate::tracker::journal;
    use crate::tracker::testing::{at, monday_morning};

    #[test]
    fn empty_store_scores_zero() {
        let summary = build_dashboard_at(monday_morning(), &AppData::default());
        assert_eq!(summary.overall, 0);
        assert_eq!(summary.week, "2026-W43");
        assert_eq!(summary.date, "2026-10-19");
        assert_eq!(summary.last_7_days.len(), 7);
        assert_eq!(summary.last_7_days[6].date, "2026-10-19");
        assert_eq!(summary.last_7_days[0].date, "2026-10-13");
    }

    #[test]
    fn overall_averages_every_domain() {
        let now = monday_morning();
        let today = now.date_naive();
        let mut data = AppData::default();

        habits::sport_quick_add(&mut data, today).unwrap(); // 25
        for _ in 0..7 {
            habits::reading_quick_add(&mut data, today).unwrap(); // 100
        }
        habits::nutrition_quick_add(&mut data, today).unwrap();
        habits::nutrition_quick_add(&mut data, today).unwrap(); // 50
        relationship::toggle_together(&mut data, today); // 25
        mental::adjust_me_time(&mut data, today, 10).unwrap(); // 100
        uni::adjust_deep_work(&mut data, today, 420).unwrap(); // 100

        let summary = build_dashboard_at(now, &data);
        assert_eq!(
            [summary.sport, summary.reading, summary.nutrition, summary.relationship, summary.mental, summary.uni],
            [25, 100, 50, 25, 100, 100]
        );
        // 400 / 6 = 66.67
        assert_eq!(summary.overall, 67);
        let point = &summary.last_7_days[6];
        assert_eq!(point.nutrition, 50);
        assert!(point.together);
        assert_eq!(point.deep_work_minutes, 420);
    }

    #[test]
    fn counts_only_todays_journal_and_open_items() {
        let now = monday_morning();
        let mut data = AppData::default();
        journal::add_entry(&mut data, now, "today", Mood::Good).unwrap();
        journal::add_entry(&mut data, at(2026, 10, 18, 23, 0), "yesterday", Mood::Neutral).unwrap();
        let task = NewTask {
            title: "ship it".to_string(),
            priority: Priority::Critical,
        };
        let done = uni::add_task(&mut data, now, &task).unwrap();
        uni::add_task(&mut data, now, &task).unwrap();
        uni::toggle_task(&mut data, done.id).unwrap();
        let note = notes::add_note(&mut data, now, "idea").unwrap();
        notes::add_note(&mut data, now, "another").unwrap();
        notes::process_note(&mut data, note.id).unwrap();

        let summary = build_dashboard_at(now, &data);
        assert_eq!(summary.journal_today, 1);
        assert_eq!(summary.open_tasks, 1);
        assert_eq!(summary.open_notes, 1);
    }
}
