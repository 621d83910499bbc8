use crate::handlers::{self, habits, journal, mental, notes, relationship, uni};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sport/quick-add", post(habits::form_sport_quick_add))
        .route("/sport/undo", post(habits::form_sport_undo))
        .route("/reading/quick-add", post(habits::form_reading_quick_add))
        .route("/reading/undo", post(habits::form_reading_undo))
        .route("/nutrition/quick-add", post(habits::form_nutrition_quick_add))
        .route("/nutrition/undo", post(habits::form_nutrition_undo))
        .route("/mental/add", post(mental::form_add_hour))
        .route("/mental/sub", post(mental::form_sub_hour))
        .route("/relationship/together", post(relationship::form_toggle_together))
        .route("/notes", post(notes::form_add))
        .route("/notes/:id/process", post(notes::form_process))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/sport", get(habits::get_sport))
        .route("/api/sport/toggle", post(habits::sport_toggle))
        .route("/api/sport/quick-add", post(habits::sport_quick_add))
        .route("/api/sport/undo", post(habits::sport_undo))
        .route("/api/reading", get(habits::get_reading))
        .route("/api/reading/toggle", post(habits::reading_toggle))
        .route("/api/reading/quick-add", post(habits::reading_quick_add))
        .route("/api/reading/undo", post(habits::reading_undo))
        .route("/api/nutrition", get(habits::get_nutrition))
        .route("/api/nutrition/toggle", post(habits::nutrition_toggle))
        .route("/api/nutrition/quick-add", post(habits::nutrition_quick_add))
        .route("/api/nutrition/undo", post(habits::nutrition_undo))
        .route("/api/relationship", get(relationship::get_relationship))
        .route("/api/relationship/together", post(relationship::toggle_together))
        .route("/api/relationship/check-in", post(relationship::check_in))
        .route("/api/mental", get(mental::get_mental))
        .route("/api/mental/adjust", post(mental::adjust))
        .route("/api/uni", get(uni::get_uni))
        .route("/api/uni/log", post(uni::log))
        .route("/api/uni/minutes", post(uni::adjust_minutes))
        .route("/api/uni/tasks", post(uni::add_task))
        .route("/api/uni/tasks/:id/toggle", post(uni::toggle_task))
        .route("/api/uni/tasks/:id", delete(uni::delete_task))
        .route("/api/journal", get(journal::list).post(journal::add))
        .route("/api/journal/:id", delete(journal::delete))
        .route("/api/notes", get(notes::list).post(notes::add))
        .route("/api/notes/:id/process", post(notes::process))
        .route("/api/notes/:id", delete(notes::delete))
        .route("/api/debug/reset", post(handlers::debug_reset))
        .with_state(state)
}
