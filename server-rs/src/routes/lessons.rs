use axum::{extract::State, Extension, Json};
use chrono::Local;

use crate::error::{AppError, AppResult};
use crate::format::{DateFormatter, DisplayLocale};
use crate::models::{LessonSlotBatchesResponse, ScheduleWindowResponse};
use crate::services::schedule_window::window_response;
use crate::AppState;

/// Every lesson slot batch, newest first. No filters, no paging.
pub async fn list_admin_schedules(
    State(state): State<AppState>,
) -> AppResult<Json<LessonSlotBatchesResponse>> {
    let batches = state
        .store
        .lesson_slot_batches()
        .await
        .map_err(|e| AppError::from_store(e, state.config.errors.expose_store_messages))?;

    tracing::debug!(count = batches.len(), "listed lesson slot batches");
    Ok(Json(LessonSlotBatchesResponse { batches }))
}

/// Default seven-day window for the schedule grid, in the club's timezone.
pub async fn get_schedule_window(
    State(state): State<AppState>,
    Extension(locale): Extension<DisplayLocale>,
) -> Json<ScheduleWindowResponse> {
    let now = state.clock.now();
    let body = match state.config.display.utc_offset {
        Some(offset) => window_response(now, &DateFormatter::new(locale, offset)),
        None => window_response(now, &DateFormatter::new(locale, Local)),
    };
    Json(body)
}
