use super::{OpResult, Rejection, non_empty};
use crate::models::{AppData, BrainDumpNote};
use chrono::{DateTime, Local};

pub fn add_note(data: &mut AppData, now: DateTime<Local>, content: &str) -> OpResult<BrainDumpNote> {
    let content = non_empty(content, "note is empty")?;
    let note = BrainDumpNote {
        id: data.allocate_id(),
        content,
        is_processed: false,
        created_at: now,
    };
    data.notes.push(note.clone());
    Ok(note)
}

/// Unprocessed notes, newest first.
pub fn open_notes(data: &AppData) -> Vec<BrainDumpNote> {
    let mut notes: Vec<BrainDumpNote> = data.notes.iter().filter(|note| !note.is_processed).cloned().collect();
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    notes
}

pub fn process_note(data: &mut AppData, id: u64) -> OpResult<BrainDumpNote> {
    let note = data
        .notes
        .iter_mut()
        .find(|note| note.id == id)
        .ok_or(Rejection::NotFound(id))?;
    if note.is_processed {
        return Err(Rejection::NoOp("note already processed"));
    }
    note.is_processed = true;
    Ok(note.clone())
}

pub fn delete_note(data: &mut AppData, id: u64) -> OpResult<BrainDumpNote> {
    let index = data
        .notes
        .iter()
        .position(|note| note.id == id)
        .ok_or(Rejection::NotFound(id))?;
    Ok(data.notes.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::testing::at;

    #[test]
    fn processed_notes_drop_out_of_the_list() {
        let mut data = AppData::default();
        let older = add_note(&mut data, at(2026, 10, 19, 8, 0), "buy stamps").unwrap();
        let newer = add_note(&mut data, at(2026, 10, 19, 9, 0), "call landlord").unwrap();

        let ids: Vec<u64> = open_notes(&data).iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        process_note(&mut data, newer.id).unwrap();
        let ids: Vec<u64> = open_notes(&data).iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![older.id]);
        assert_eq!(data.notes.len(), 2);
        assert_eq!(
            process_note(&mut data, newer.id),
            Err(Rejection::NoOp("note already processed"))
        );
    }

    #[test]
    fn blank_note_is_rejected() {
        let mut data = AppData::default();
        assert!(add_note(&mut data, at(2026, 10, 19, 8, 0), "\t").is_err());
        assert!(data.notes.is_empty());
    }

    #[test]
    fn delete_is_permanent() {
        let mut data = AppData::default();
        let note = add_note(&mut data, at(2026, 10, 19, 8, 0), "idea").unwrap();
        delete_note(&mut data, note.id).unwrap();
        assert!(data.notes.is_empty());
        assert_eq!(delete_note(&mut data, note.id), Err(Rejection::NotFound(note.id)));
    }
}
