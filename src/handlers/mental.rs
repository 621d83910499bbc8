use super::{redirect_after, respond, today};
use crate::models::{ActionResult, AdjustRequest, MentalView};
use crate::state::AppState;
use crate::tracker::mental;
use axum::{extract::State, response::Redirect, Json};

pub async fn get_mental(State(state): State<AppState>) -> Json<MentalView> {
    let today = today();
    Json(state.read(|data| mental::view(data, today)).await)
}

pub async fn adjust(State(state): State<AppState>, Json(payload): Json<AdjustRequest>) -> Json<ActionResult<MentalView>> {
    let today = today();
    respond(
        "me-time adjust",
        state.mutate(|data| mental::adjust_me_time(data, today, payload.delta)).await,
    )
}

pub async fn form_add_hour(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "me-time add", |data| mental::adjust_me_time(data, today, 1)).await
}

pub async fn form_sub_hour(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "me-time sub", |data| mental::adjust_me_time(data, today, -1)).await
}
