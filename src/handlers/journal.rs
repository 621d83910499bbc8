use super::respond;
use crate::models::{ActionResult, JournalEntry, NewJournalEntry};
use crate::state::AppState;
use crate::tracker::journal;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;

pub async fn list(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    Json(state.read(journal::entries).await)
}

pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewJournalEntry>,
) -> Json<ActionResult<JournalEntry>> {
    let now = Local::now();
    respond(
        "journal add",
        state
            .mutate(|data| journal::add_entry(data, now, &payload.content, payload.mood))
            .await,
    )
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<u64>) -> Json<ActionResult<JournalEntry>> {
    respond("journal delete", state.mutate(|data| journal::delete_entry(data, id)).await)
}
