pub mod habits;
pub mod journal;
pub mod mental;
pub mod notes;
pub mod relationship;
pub mod uni;

use crate::errors::AppError;
use crate::models::{ActionResult, DashboardSummary};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::tracker::{self, OpResult};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let (summary, notes) = state
        .read(|data| (build_dashboard(data), tracker::notes::open_notes(data)))
        .await;
    Html(render_index(&summary, &notes))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.read(build_dashboard).await)
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub date: String,
}

pub async fn debug_reset(State(state): State<AppState>) -> Json<ActionResult<ResetResponse>> {
    let now = Local::now();
    let result = state
        .mutate(|data| {
            tracker::reset_current(data, now);
            Ok(ResetResponse {
                date: now.date_naive().to_string(),
            })
        })
        .await;
    respond("debug reset", result)
}

/// Maps an operation result onto the `{success, ...}` wire shape. Store
/// failures are logged here and never propagate past the handler.
pub(crate) fn respond<T>(action: &str, result: Result<OpResult<T>, AppError>) -> Json<ActionResult<T>> {
    Json(match result {
        Ok(Ok(value)) => {
            info!("{action}: applied");
            ActionResult::ok(value)
        }
        Ok(Err(rejection)) => {
            info!("{action}: rejected ({rejection})");
            ActionResult::rejected(rejection.to_string())
        }
        Err(err) => {
            error!("{action}: failed to persist store: {err}");
            ActionResult::failed(err.message)
        }
    })
}

/// Form posts from the dashboard page: apply, then send the browser back to
/// `/` so the page re-renders from the store whatever the outcome.
pub(crate) async fn redirect_after<T>(
    state: &AppState,
    action: &str,
    op: impl FnOnce(&mut crate::models::AppData) -> OpResult<T>,
) -> Redirect {
    let Json(result) = respond(action, state.mutate(op).await);
    if !result.success {
        info!("{action}: dashboard left unchanged");
    }
    Redirect::to("/")
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
