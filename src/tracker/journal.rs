use super::{OpResult, Rejection, non_empty};
use crate::models::{AppData, JournalEntry, Mood};
use chrono::{DateTime, Local};

pub fn add_entry(data: &mut AppData, now: DateTime<Local>, content: &str, mood: Mood) -> OpResult<JournalEntry> {
    let content = non_empty(content, "journal entry is empty")?;
    let entry = JournalEntry {
        id: data.allocate_id(),
        content,
        mood,
        created_at: now,
    };
    data.journal.push(entry.clone());
    Ok(entry)
}

/// All entries, newest first.
pub fn entries(data: &AppData) -> Vec<JournalEntry> {
    let mut entries = data.journal.clone();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    entries
}

pub fn delete_entry(data: &mut AppData, id: u64) -> OpResult<JournalEntry> {
    let index = data
        .journal
        .iter()
        .position(|entry| entry.id == id)
        .ok_or(Rejection::NotFound(id))?;
    Ok(data.journal.remove(index))
}
