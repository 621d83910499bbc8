use super::{redirect_after, respond, today};
use crate::models::{ActionResult, CheckIn, RelationshipDay, RelationshipView};
use crate::state::AppState;
use crate::tracker::relationship;
use axum::{extract::State, response::Redirect, Json};

pub async fn get_relationship(State(state): State<AppState>) -> Json<RelationshipView> {
    let today = today();
    Json(state.read(|data| relationship::view(data, today)).await)
}

pub async fn toggle_together(State(state): State<AppState>) -> Json<ActionResult<RelationshipDay>> {
    let today = today();
    let result = state
        .mutate(|data| Ok(relationship::toggle_together(data, today)))
        .await;
    respond("relationship together", result)
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckIn>,
) -> Json<ActionResult<RelationshipDay>> {
    let today = today();
    respond(
        "relationship check-in",
        state.mutate(|data| relationship::check_in(data, today, &payload)).await,
    )
}

pub async fn form_toggle_together(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "relationship together", |data| {
        Ok(relationship::toggle_together(data, today))
    })
    .await
}
