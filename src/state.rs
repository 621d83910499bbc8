use crate::errors::AppError;
use crate::models::AppData;
use crate::storage::persist_data;
use crate::tracker::OpResult;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn read<T>(&self, view: impl FnOnce(&AppData) -> T) -> T {
        let data = self.data.lock().await;
        view(&data)
    }

    /// Runs `op` against a copy of the store and persists it. The shared
    /// state only moves forward once the write succeeded; rejected operations
    /// never touch disk.
    pub async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut AppData) -> OpResult<T>,
    ) -> Result<OpResult<T>, AppError> {
        let mut data = self.data.lock().await;
        let mut draft = data.clone();
        let value = match op(&mut draft) {
            Ok(value) => value,
            Err(rejection) => return Ok(Err(rejection)),
        };
        persist_data(&self.data_path, &draft).await?;
        *data = draft;
        Ok(Ok(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Rejection, habits};
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("life_dashboard_state_{name}_{}.json", std::process::id()))
    }

    #[tokio::test]
    async fn failed_write_keeps_last_good_state() {
        let missing_dir = std::env::temp_dir().join("life_dashboard_no_such_dir").join("state.json");
        let state = AppState::new(missing_dir, AppData::default());

        let result = state.mutate(|data| habits::sport_quick_add(data, monday())).await;
        assert!(result.is_err());
        assert!(state.read(|data| data.sport.is_empty()).await);
    }

    #[tokio::test]
    async fn successful_write_is_visible_and_on_disk() {
        let path = temp_path("ok");
        let state = AppState::new(path.clone(), AppData::default());

        let view = state
            .mutate(|data| habits::sport_quick_add(data, monday()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.percent, 25);
        assert_eq!(state.read(|data| data.sport.len()).await, 1);
        assert!(path.exists());
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn rejected_operation_skips_the_write() {
        let path = temp_path("rejected");
        let _ = std::fs::remove_file(&path);
        let state = AppState::new(path.clone(), AppData::default());

        let result = state.mutate(|data| habits::sport_undo(data, monday())).await.unwrap();
        assert_eq!(result, Err(Rejection::NoOp("nothing to undo")));
        assert!(!path.exists());
    }
}
