use super::{redirect_after, respond, today};
use crate::models::{ActionResult, NutritionDay, ReadingWeek, SlotRequest, SlotsView, SportWeek};
use crate::state::AppState;
use crate::tracker::habits;
use axum::{extract::State, response::Redirect, Json};

type SlotsReply<T> = Json<ActionResult<SlotsView<T>>>;

pub async fn get_sport(State(state): State<AppState>) -> Json<SlotsView<SportWeek>> {
    let today = today();
    Json(state.read(|data| habits::sport(data, today)).await)
}

pub async fn sport_toggle(State(state): State<AppState>, Json(payload): Json<SlotRequest>) -> SlotsReply<SportWeek> {
    let today = today();
    respond("sport toggle", state.mutate(|data| habits::sport_toggle(data, today, &payload.slot)).await)
}

pub async fn sport_quick_add(State(state): State<AppState>) -> SlotsReply<SportWeek> {
    let today = today();
    respond("sport quick-add", state.mutate(|data| habits::sport_quick_add(data, today)).await)
}

pub async fn sport_undo(State(state): State<AppState>) -> SlotsReply<SportWeek> {
    let today = today();
    respond("sport undo", state.mutate(|data| habits::sport_undo(data, today)).await)
}

pub async fn get_reading(State(state): State<AppState>) -> Json<SlotsView<ReadingWeek>> {
    let today = today();
    Json(state.read(|data| habits::reading(data, today)).await)
}

pub async fn reading_toggle(State(state): State<AppState>, Json(payload): Json<SlotRequest>) -> SlotsReply<ReadingWeek> {
    let today = today();
    respond("reading toggle", state.mutate(|data| habits::reading_toggle(data, today, &payload.slot)).await)
}

pub async fn reading_quick_add(State(state): State<AppState>) -> SlotsReply<ReadingWeek> {
    let today = today();
    respond("reading quick-add", state.mutate(|data| habits::reading_quick_add(data, today)).await)
}

pub async fn reading_undo(State(state): State<AppState>) -> SlotsReply<ReadingWeek> {
    let today = today();
    respond("reading undo", state.mutate(|data| habits::reading_undo(data, today)).await)
}

pub async fn get_nutrition(State(state): State<AppState>) -> Json<SlotsView<NutritionDay>> {
    let today = today();
    Json(state.read(|data| habits::nutrition(data, today)).await)
}

pub async fn nutrition_toggle(State(state): State<AppState>, Json(payload): Json<SlotRequest>) -> SlotsReply<NutritionDay> {
    let today = today();
    respond("nutrition toggle", state.mutate(|data| habits::nutrition_toggle(data, today, &payload.slot)).await)
}

pub async fn nutrition_quick_add(State(state): State<AppState>) -> SlotsReply<NutritionDay> {
    let today = today();
    respond("nutrition quick-add", state.mutate(|data| habits::nutrition_quick_add(data, today)).await)
}

pub async fn nutrition_undo(State(state): State<AppState>) -> SlotsReply<NutritionDay> {
    let today = today();
    respond("nutrition undo", state.mutate(|data| habits::nutrition_undo(data, today)).await)
}

pub async fn form_sport_quick_add(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "sport quick-add", |data| habits::sport_quick_add(data, today)).await
}

pub async fn form_sport_undo(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "sport undo", |data| habits::sport_undo(data, today)).await
}

pub async fn form_reading_quick_add(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "reading quick-add", |data| habits::reading_quick_add(data, today)).await
}

pub async fn form_reading_undo(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "reading undo", |data| habits::reading_undo(data, today)).await
}

pub async fn form_nutrition_quick_add(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "nutrition quick-add", |data| habits::nutrition_quick_add(data, today)).await
}

pub async fn form_nutrition_undo(State(state): State<AppState>) -> Redirect {
    let today = today();
    redirect_after(&state, "nutrition undo", |data| habits::nutrition_undo(data, today)).await
}
