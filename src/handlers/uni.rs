use super::{respond, today};
use crate::models::{ActionResult, AdjustRequest, NewTask, UniDay, UniLog, UniTask, UniView};
use crate::state::AppState;
use crate::tracker::uni;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;

pub async fn get_uni(State(state): State<AppState>) -> Json<UniView> {
    let today = today();
    Json(state.read(|data| uni::view(data, today)).await)
}

pub async fn log(State(state): State<AppState>, Json(payload): Json<UniLog>) -> Json<ActionResult<UniDay>> {
    let today = today();
    respond("deep-work log", state.mutate(|data| uni::log_deep_work(data, today, &payload)).await)
}

pub async fn adjust_minutes(
    State(state): State<AppState>,
    Json(payload): Json<AdjustRequest>,
) -> Json<ActionResult<UniDay>> {
    let today = today();
    respond(
        "deep-work minutes",
        state.mutate(|data| uni::adjust_deep_work(data, today, payload.delta)).await,
    )
}

pub async fn add_task(State(state): State<AppState>, Json(payload): Json<NewTask>) -> Json<ActionResult<UniTask>> {
    let now = Local::now();
    respond("task add", state.mutate(|data| uni::add_task(data, now, &payload)).await)
}

pub async fn toggle_task(State(state): State<AppState>, Path(id): Path<u64>) -> Json<ActionResult<UniTask>> {
    respond("task toggle", state.mutate(|data| uni::toggle_task(data, id)).await)
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> Json<ActionResult<UniTask>> {
    respond("task delete", state.mutate(|data| uni::delete_task(data, id)).await)
}
