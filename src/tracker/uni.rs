use super::mental::saturating_offset;
use super::{OpResult, Rejection, non_empty};
use crate::buckets::{WeekKey, day_key, week_days};
use crate::models::{AppData, NewTask, Priority, UniDay, UniLog, UniTask, UniView, UniWeekStats};
use crate::progress::{UNI_WEEKLY_GOAL, deep_work_percent, uni_weekly_percent};
use chrono::{DateTime, Duration, Local, NaiveDate};

/// Deadline given to every new critical task.
pub const CRITICAL_DEADLINE_DAYS: i64 = 7;

pub fn view(data: &AppData, today: NaiveDate) -> UniView {
    let date = day_key(today);
    let record = data.uni.get(&date).cloned().unwrap_or_default();
    UniView {
        today_percent: deep_work_percent(record.actual_deep_work_minutes, record.goal_deep_work_minutes),
        today: record,
        weekly: weekly_stats(data, today),
        critical: tasks_by_priority(data, Priority::Critical),
        important: tasks_by_priority(data, Priority::Important),
        date,
    }
}

/// One session per full hour of deep work logged this week.
pub fn weekly_stats(data: &AppData, today: NaiveDate) -> UniWeekStats {
    let minutes: u32 = week_days(today)
        .filter_map(|date| data.uni.get(&day_key(date)))
        .map(|record| record.actual_deep_work_minutes)
        .fold(0, u32::saturating_add);
    let sessions = minutes / 60;

    UniWeekStats {
        week: WeekKey::from_date(today).label(),
        deep_work_minutes: minutes,
        sessions,
        goal: UNI_WEEKLY_GOAL,
        percent: uni_weekly_percent(sessions),
    }
}

/// Upserts today's deep-work log; fields left out of `log` keep their value.
pub fn log_deep_work(data: &mut AppData, today: NaiveDate, log: &UniLog) -> OpResult<UniDay> {
    if let Some(level) = log.focus_level {
        if !(1..=5).contains(&level) {
            return Err(Rejection::Invalid("focus level must be between 1 and 5"));
        }
    }
    if log.goal_deep_work_minutes == Some(0) {
        return Err(Rejection::Invalid("deep work goal must be positive"));
    }

    let record = data.uni.entry(day_key(today)).or_default();
    merge(&mut record.main_task, &log.main_task);
    merge(&mut record.output_produced, &log.output_produced);
    merge(&mut record.technical_concept, &log.technical_concept);
    merge(&mut record.business_explanation, &log.business_explanation);
    merge(&mut record.topic, &log.topic);
    if let Some(goal) = log.goal_deep_work_minutes {
        record.goal_deep_work_minutes = goal;
    }
    if let Some(actual) = log.actual_deep_work_minutes {
        record.actual_deep_work_minutes = actual;
    }
    if log.focus_level.is_some() {
        record.focus_level = log.focus_level;
    }
    if let Some(value) = log.can_explain {
        record.can_explain = value;
    }
    if let Some(value) = log.reality_check_busy {
        record.reality_check_busy = value;
    }
    if let Some(value) = log.reality_check_avoided {
        record.reality_check_avoided = value;
    }
    Ok(record.clone())
}

fn merge(field: &mut String, update: &Option<String>) {
    if let Some(value) = update {
        *field = value.trim().to_string();
    }
}

/// Adds or removes deep-work minutes for today, never below zero.
pub fn adjust_deep_work(data: &mut AppData, today: NaiveDate, delta: i64) -> OpResult<UniDay> {
    if delta == 0 {
        return Err(Rejection::NoOp("nothing to change"));
    }
    let key = day_key(today);
    let current = data.uni.get(&key).map_or(0, |record| record.actual_deep_work_minutes);
    if delta < 0 && current == 0 {
        return Err(Rejection::NoOp("nothing to undo"));
    }
    let record = data.uni.entry(key).or_default();
    record.actual_deep_work_minutes = saturating_offset(current, delta);
    Ok(record.clone())
}

pub fn add_task(data: &mut AppData, now: DateTime<Local>, task: &NewTask) -> OpResult<UniTask> {
    let title = non_empty(&task.title, "task title is empty")?;
    let deadline = match task.priority {
        Priority::Critical => Some(now + Duration::days(CRITICAL_DEADLINE_DAYS)),
        Priority::Important => None,
    };
    let task = UniTask {
        id: data.allocate_id(),
        title,
        priority: task.priority,
        is_done: false,
        deadline,
        created_at: now,
    };
    data.tasks.push(task.clone());
    Ok(task)
}

/// Open tasks of one tier, newest first.
pub fn tasks_by_priority(data: &AppData, priority: Priority) -> Vec<UniTask> {
    let mut tasks: Vec<UniTask> = data
        .tasks
        .iter()
        .filter(|task| task.priority == priority && !task.is_done)
        .cloned()
        .collect();
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    tasks
}

pub fn toggle_task(data: &mut AppData, id: u64) -> OpResult<UniTask> {
    let task = data
        .tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(Rejection::NotFound(id))?;
    task.is_done = !task.is_done;
    Ok(task.clone())
}

pub fn delete_task(data: &mut AppData, id: u64) -> OpResult<UniTask> {
    let index = data
        .tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(Rejection::NotFound(id))?;
    Ok(data.tasks.remove(index))
}
