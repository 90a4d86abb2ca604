//! Body of the `recordChrono` call and of the collector's own reply.

use chronolog_core::timelog::TimeLogFilter;
use chronolog_core::types::Timestamp;
use chronolog_db::models::timelog::TimeLog;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// `params` of the `recordChrono` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectPayload {
    #[serde(serialize_with = "rfc3339_millis")]
    pub collected_at: Timestamp,
    pub filter: TimeLogFilter,
    pub data: CollectedData,
}

#[derive(Debug, Serialize)]
pub struct CollectedData {
    pub timelogs: Vec<TimeLog>,
}

/// Reply of `GET /collect` after a successful forward.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectResponse {
    pub ok: bool,
    pub recorder_response: Value,
    pub payload_summary: PayloadSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSummary {
    pub timesheet_count: usize,
}

fn rfc3339_millis<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}
