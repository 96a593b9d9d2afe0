use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::enrollment_progress::StepIndicator;

#[derive(Deserialize)]
pub struct ProgressQuery {
    pub step: Option<i64>,
}

pub async fn get_progress(Query(q): Query<ProgressQuery>) -> AppResult<Json<StepIndicator>> {
    let step = q
        .step
        .ok_or_else(|| AppError::BadRequest("step is required".into()))?;
    let indicator = StepIndicator::new(step).map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(Json(indicator))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::build_router;
    use crate::testing::{get_json, test_state, FakeStore};

    #[tokio::test]
    async fn first_step() {
        let router = build_router(test_state(FakeStore::default()));
        let (status, body) = get_json(router, "/api/enrollment/progress?step=1", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "currentStep": 1,
                "segments": [{ "step": 1, "active": true }, { "step": 2, "active": false }]
            })
        );
    }

    #[tokio::test]
    async fn missing_or_invalid_step_is_bad_request() {
        for uri in ["/api/enrollment/progress", "/api/enrollment/progress?step=3"] {
            let router = build_router(test_state(FakeStore::default()));
            let (status, body) = get_json(router, uri, &[]).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].is_string());
        }
    }
}
