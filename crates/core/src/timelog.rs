//! Time-log collection filters.
//!
//! The collector accepts loosely typed query parameters and turns them into
//! a [`TimeLogFilter`]. Parsing never fails: unusable values fall back to
//! "no filter" for ids and to [`DEFAULT_LIMIT`] for the row limit.

use std::num::IntErrorKind;

use serde::{Serialize, Serializer};

use crate::types::DbId;

/// Row limit used when the caller supplies none or an unusable one.
pub const DEFAULT_LIMIT: i32 = 200;

/// Absolute cap on the number of rows collected per request.
pub const MAX_LIMIT: i32 = 1000;

/// Effective filter for a collection run.
///
/// Serializes as the filter description forwarded to the recorder, with
/// missing id filters rendered as `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogFilter {
    #[serde(serialize_with = "id_or_all")]
    pub user_id: Option<DbId>,
    #[serde(serialize_with = "id_or_all")]
    pub project_id: Option<DbId>,
    pub limit: i32,
}

impl TimeLogFilter {
    /// Build a filter from raw query-string values.
    pub fn from_raw(user_id: Option<&str>, project_id: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            user_id: parse_id(user_id),
            project_id: parse_id(project_id),
            limit: effective_limit(limit),
        }
    }
}

/// Resolve the effective row limit.
///
/// Absent, non-numeric and non-positive values yield [`DEFAULT_LIMIT`];
/// anything above [`MAX_LIMIT`], however large, is capped.
pub fn effective_limit(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return DEFAULT_LIMIT;
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n <= 0 => DEFAULT_LIMIT,
        Ok(n) if n > i64::from(MAX_LIMIT) => MAX_LIMIT,
        // Bounded by the guards above.
        Ok(n) => n as i32,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_LIMIT,
        Err(_) => DEFAULT_LIMIT,
    }
}

/// Parse an optional id filter. Zero, negative and non-numeric ids disable
/// the filter.
fn parse_id(raw: Option<&str>) -> Option<DbId> {
    raw.and_then(|s| s.trim().parse::<DbId>().ok())
        .filter(|id| *id > 0)
}

fn id_or_all<S: Serializer>(id: &Option<DbId>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.serialize_i32(*id),
        None => serializer.serialize_str("all"),
    }
}
