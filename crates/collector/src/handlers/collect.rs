//! Handler for collecting time logs and forwarding them to the recorder.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use chronolog_core::error::CoreError;
use chronolog_core::jsonrpc::{JsonRpcRequest, METHOD_RECORD_CHRONO};
use chronolog_core::timelog::TimeLogFilter;
use chronolog_db::models::timelog::TimeLog;
use chronolog_db::repositories::TimeLogRepo;

use crate::error::AppResult;
use crate::payload::{CollectPayload, CollectResponse, CollectedData, PayloadSummary};
use crate::state::AppState;

/// Raw query parameters. Kept as strings so malformed numbers fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectParams {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub limit: Option<String>,
}

impl CollectParams {
    pub fn filter(&self) -> TimeLogFilter {
        TimeLogFilter::from_raw(
            self.user_id.as_deref(),
            self.project_id.as_deref(),
            self.limit.as_deref(),
        )
    }
}

/// GET /collect
///
/// Read the newest time logs matching the filter and forward them to the
/// recorder as one `recordChrono` call.
pub async fn collect(
    State(state): State<AppState>,
    Query(params): Query<CollectParams>,
) -> AppResult<Json<CollectResponse>> {
    tracing::info!(?params, "Collector received request");

    let filter = params.filter();
    let timelogs = load_timelogs(&state, &filter).await?;
    let timesheet_count = timelogs.len();

    let payload = CollectPayload {
        collected_at: Utc::now(),
        filter,
        data: CollectedData { timelogs },
    };
    let rpc_params = serde_json::to_value(&payload)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize payload: {e}")))?;

    let request = JsonRpcRequest::new(Utc::now().timestamp_millis(), METHOD_RECORD_CHRONO, rpc_params);
    let recorder_response = state.recorder.call(&request).await?;

    tracing::info!(timesheet_count, recorder = %state.recorder.url(), "Forwarded time logs");

    Ok(Json(CollectResponse {
        ok: true,
        recorder_response,
        payload_summary: PayloadSummary { timesheet_count },
    }))
}

/// Run the time-log query, dropping the cached connection on failure so the
/// next request reconnects.
async fn load_timelogs(state: &AppState, filter: &TimeLogFilter) -> AppResult<Vec<TimeLog>> {
    let result = {
        let mut client = state.db.acquire().await?;
        TimeLogRepo::list(&mut client, filter).await
    };

    match result {
        Ok(rows) => Ok(rows),
        Err(err) => {
            state.db.discard().await;
            Err(err.into())
        }
    }
}
