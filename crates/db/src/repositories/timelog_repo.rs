//! Repository for the `dbo.TimeLog` table.

use chronolog_core::timelog::TimeLogFilter;
use tiberius::Query;

use crate::client::DbClient;
use crate::error::DbError;
use crate::models::timelog::TimeLog;

/// Column list for `TimeLog` queries.
const COLUMNS: &str = "id, userId, projectId, WorkDate, Hours";

/// Read access to recorded time logs.
pub struct TimeLogRepo;

impl TimeLogRepo {
    /// List the most recent time logs matching `filter`, newest work date
    /// first, at most `filter.limit` rows.
    pub async fn list(client: &mut DbClient, filter: &TimeLogFilter) -> Result<Vec<TimeLog>, DbError> {
        let (sql, binds) = build_list_query(filter);

        let mut query = Query::new(sql);
        for value in binds {
            query.bind(value);
        }

        let rows = query.query(client).await?.into_first_result().await?;
        rows.iter().map(TimeLog::from_row).collect()
    }
}

/// Render the list query and its positional parameters (`@P1`, `@P2`, ...).
fn build_list_query(filter: &TimeLogFilter) -> (String, Vec<i32>) {
    let mut binds = vec![filter.limit];
    let mut clauses = Vec::new();

    if let Some(user_id) = filter.user_id {
        binds.push(user_id);
        clauses.push(format!("userId = @P{}", binds.len()));
    }
    if let Some(project_id) = filter.project_id {
        binds.push(project_id);
        clauses.push(format!("projectId = @P{}", binds.len()));
    }

    let mut sql = format!("SELECT TOP (@P1) {COLUMNS} FROM dbo.TimeLog");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY WorkDate DESC, id DESC");

    (sql, binds)
}
