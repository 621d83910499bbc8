use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SportWeek {
    pub gym1: bool,
    pub gym2: bool,
    pub run1: bool,
    pub run2: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReadingWeek {
    pub day1: bool,
    pub day2: bool,
    pub day3: bool,
    pub day4: bool,
    pub day5: bool,
    pub day6: bool,
    pub day7: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NutritionDay {
    pub protein: bool,
    pub vitamins: bool,
    pub water: bool,
    pub sweets: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationshipDay {
    pub is_together: bool,
    pub quality_time: bool,
    pub communication: bool,
    #[serde(default)]
    pub gratitude: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MentalWeek {
    pub me_time_hours: u32,
}

pub const DEFAULT_DEEP_WORK_GOAL_MINUTES: u32 = 120;

fn default_deep_work_goal() -> u32 {
    DEFAULT_DEEP_WORK_GOAL_MINUTES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniDay {
    #[serde(default)]
    pub main_task: String,
    #[serde(default = "default_deep_work_goal")]
    pub goal_deep_work_minutes: u32,
    #[serde(default)]
    pub actual_deep_work_minutes: u32,
    #[serde(default)]
    pub focus_level: Option<u8>,
    #[serde(default)]
    pub output_produced: String,
    #[serde(default)]
    pub technical_concept: String,
    #[serde(default)]
    pub business_explanation: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub can_explain: bool,
    #[serde(default)]
    pub reality_check_busy: bool,
    #[serde(default)]
    pub reality_check_avoided: bool,
}

impl Default for UniDay {
    fn default() -> Self {
        Self {
            main_task: String::new(),
            goal_deep_work_minutes: DEFAULT_DEEP_WORK_GOAL_MINUTES,
            actual_deep_work_minutes: 0,
            focus_level: None,
            output_produced: String::new(),
            technical_concept: String::new(),
            business_explanation: String::new(),
            topic: String::new(),
            can_explain: false,
            reality_check_busy: false,
            reality_check_avoided: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    Important,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniTask {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub is_done: bool,
    pub deadline: Option<DateTime<Local>>,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mood {
    Good,
    #[default]
    Neutral,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub content: String,
    pub mood: Mood,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainDumpNote {
    pub id: u64,
    pub content: String,
    pub is_processed: bool,
    pub created_at: DateTime<Local>,
}

/// The whole record store. Weekly maps are keyed by `WeekKey` labels
/// (`2026-W43`), daily maps by `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub sport: BTreeMap<String, SportWeek>,
    #[serde(default)]
    pub reading: BTreeMap<String, ReadingWeek>,
    #[serde(default)]
    pub mental: BTreeMap<String, MentalWeek>,
    #[serde(default)]
    pub nutrition: BTreeMap<String, NutritionDay>,
    #[serde(default)]
    pub relationship: BTreeMap<String, RelationshipDay>,
    #[serde(default)]
    pub uni: BTreeMap<String, UniDay>,
    #[serde(default)]
    pub tasks: Vec<UniTask>,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
    #[serde(default)]
    pub notes: Vec<BrainDumpNote>,
    #[serde(default)]
    pub next_id: u64,
}

impl AppData {
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }
}

// Requests

#[derive(Debug, Deserialize)]
pub struct SlotRequest {
    pub slot: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub delta: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CheckIn {
    #[serde(default)]
    pub quality_time: bool,
    #[serde(default)]
    pub communication: bool,
    #[serde(default)]
    pub gratitude: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UniLog {
    #[serde(default)]
    pub main_task: Option<String>,
    #[serde(default)]
    pub goal_deep_work_minutes: Option<u32>,
    #[serde(default)]
    pub actual_deep_work_minutes: Option<u32>,
    #[serde(default)]
    pub focus_level: Option<u8>,
    #[serde(default)]
    pub output_produced: Option<String>,
    #[serde(default)]
    pub technical_concept: Option<String>,
    #[serde(default)]
    pub business_explanation: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub can_explain: Option<bool>,
    #[serde(default)]
    pub reality_check_busy: Option<bool>,
    #[serde(default)]
    pub reality_check_avoided: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
}

#[derive(Debug, Deserialize)]
pub struct NewJournalEntry {
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
}

#[derive(Debug, Deserialize)]
pub struct NewNote {
    pub content: String,
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotsView<T> {
    pub bucket: String,
    pub record: T,
    pub completed: u32,
    pub goal: u32,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalView {
    pub week: String,
    pub me_time_hours: u32,
    pub goal: u32,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipWeekStats {
    pub week: String,
    pub days_together: u32,
    pub goal: u32,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipView {
    pub date: String,
    pub today: RelationshipDay,
    pub weekly: RelationshipWeekStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniWeekStats {
    pub week: String,
    pub deep_work_minutes: u32,
    pub sessions: u32,
    pub goal: u32,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniView {
    pub date: String,
    pub today: UniDay,
    pub today_percent: u8,
    pub weekly: UniWeekStats,
    pub critical: Vec<UniTask>,
    pub important: Vec<UniTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub date: String,
    pub week: String,
    pub sport: u8,
    pub reading: u8,
    pub nutrition: u8,
    pub relationship: u8,
    pub mental: u8,
    pub uni: u8,
    pub overall: u8,
    pub journal_today: usize,
    pub open_tasks: usize,
    pub open_notes: usize,
    pub last_7_days: Vec<DailyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub nutrition: u8,
    pub together: bool,
    pub deep_work_minutes: u32,
}

/// Wire shape of every mutating call: `{"success": true, ...}` or
/// `{"success": false, "error"?: ..., "reason"?: ...}`.
#[derive(Debug, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            reason: None,
            data: Some(data),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: None,
            reason: Some(reason.into()),
            data: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            reason: None,
            data: None,
        }
    }
}
