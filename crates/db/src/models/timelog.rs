//! Rows of `dbo.TimeLog`.

use chrono::NaiveDate;
use chronolog_core::types::DbId;
use serde::Serialize;
use tiberius::numeric::Numeric;
use tiberius::Row;

use crate::error::DbError;

/// A row from the `dbo.TimeLog` table.
///
/// Serialized with the table's column names so the forwarded payload mirrors
/// the recordset shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeLog {
    pub id: DbId,
    #[serde(rename = "userId")]
    pub user_id: DbId,
    #[serde(rename = "projectId")]
    pub project_id: DbId,
    #[serde(rename = "WorkDate")]
    pub work_date: NaiveDate,
    #[serde(rename = "Hours")]
    pub hours: f64,
}

impl TimeLog {
    pub fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: row.try_get::<i32, _>("id")?.ok_or(DbError::UnexpectedNull("id"))?,
            user_id: row
                .try_get::<i32, _>("userId")?
                .ok_or(DbError::UnexpectedNull("userId"))?,
            project_id: row
                .try_get::<i32, _>("projectId")?
                .ok_or(DbError::UnexpectedNull("projectId"))?,
            work_date: row
                .try_get::<NaiveDate, _>("WorkDate")?
                .ok_or(DbError::UnexpectedNull("WorkDate"))?,
            hours: row
                .try_get::<Numeric, _>("Hours")?
                .map(f64::from)
                .ok_or(DbError::UnexpectedNull("Hours"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_column_names() {
        let log = TimeLog {
            id: 3,
            user_id: 10,
            project_id: 20,
            work_date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            hours: 7.5,
        };
        assert_eq!(
            serde_json::to_value(&log).unwrap(),
            serde_json::json!({
                "id": 3,
                "userId": 10,
                "projectId": 20,
                "WorkDate": "2024-05-17",
                "Hours": 7.5
            })
        );
    }
}
