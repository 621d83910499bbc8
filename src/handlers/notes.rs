use super::{redirect_after, respond};
use crate::models::{ActionResult, BrainDumpNote, NewNote};
use crate::state::AppState;
use crate::tracker::notes;
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use chrono::Local;

pub async fn list(State(state): State<AppState>) -> Json<Vec<BrainDumpNote>> {
    Json(state.read(notes::open_notes).await)
}

pub async fn add(State(state): State<AppState>, Json(payload): Json<NewNote>) -> Json<ActionResult<BrainDumpNote>> {
    let now = Local::now();
    respond("note add", state.mutate(|data| notes::add_note(data, now, &payload.content)).await)
}

pub async fn process(State(state): State<AppState>, Path(id): Path<u64>) -> Json<ActionResult<BrainDumpNote>> {
    respond("note process", state.mutate(|data| notes::process_note(data, id)).await)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<u64>) -> Json<ActionResult<BrainDumpNote>> {
    respond("note delete", state.mutate(|data| notes::delete_note(data, id)).await)
}

pub async fn form_add(State(state): State<AppState>, Form(payload): Form<NewNote>) -> Redirect {
    let now = Local::now();
    redirect_after(&state, "note add", |data| notes::add_note(data, now, &payload.content)).await
}

pub async fn form_process(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    redirect_after(&state, "note process", |data| notes::process_note(data, id)).await
}
