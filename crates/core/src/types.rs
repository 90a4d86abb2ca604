/// Integer primary keys as stored in SQL Server `INT` columns.
pub type DbId = i32;

/// UTC timestamp used in payloads sent between services.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
