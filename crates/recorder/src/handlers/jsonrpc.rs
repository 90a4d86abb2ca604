//! Handler for the recorder's JSON-RPC endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use chronolog_core::error::CoreError;
use chronolog_core::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, METHOD_RECORD_CHRONO,
};
use chronolog_db::models::chrono_log::NewChronoLog;
use chronolog_db::repositories::ChronoLogRepo;

use crate::error::RecordError;
use crate::state::AppState;

/// POST /jsonrpc
///
/// Only `recordChrono` is accepted. Every outcome is a JSON-RPC reply keyed
/// by the caller's `id`.
pub async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    let id = request.id.clone();

    if request.method() != METHOD_RECORD_CHRONO {
        tracing::warn!(method = request.method(), %id, "Unknown JSON-RPC method");
        return Json(JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Unknown method"));
    }

    match record_chrono(&state, &request).await {
        Ok(()) => {
            tracing::info!(%id, "Recorded chrono payload");
            Json(JsonRpcResponse::ok(id, "ok"))
        }
        Err(err) => {
            tracing::error!(%id, error = %err, "Failed to record chrono payload");
            Json(JsonRpcResponse::error(id, err.rpc_code(), err.to_string()))
        }
    }
}

async fn record_chrono(state: &AppState, request: &JsonRpcRequest) -> Result<(), RecordError> {
    let entry = chrono_entry(request)?;

    let result = {
        let mut client = state.db.acquire().await?;
        ChronoLogRepo::insert(&mut client, &entry).await
    };

    if let Err(err) = result {
        state.db.discard().await;
        return Err(err.into());
    }
    Ok(())
}

/// Build the stored row from a `recordChrono` call. `params` must be an
/// object; it is stored whole, and its `filter` member separately.
fn chrono_entry(request: &JsonRpcRequest) -> Result<NewChronoLog, CoreError> {
    let params = match &request.params {
        Some(params @ Value::Object(_)) => params,
        _ => return Err(CoreError::Validation("params must be an object".into())),
    };

    Ok(NewChronoLog {
        json_rpc_id: id_text(&request.id),
        filter: params.get("filter").map(Value::to_string),
        payload: params.to_string(),
    })
}

/// Correlation id as stored: strings unquoted, everything else as JSON.
fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
