//! Sequential batch execution against one live connection at a time.
//!
//! The executor owns a single [`ExecutionContext`]: the database name it is
//! targeting plus the open session. Before each batch it checks the session
//! is still live and aimed at the intended database, replacing it if not.
//! The first failing batch ends the run; batches already applied stay
//! applied.

use async_trait::async_trait;
use chronolog_db::DbError;

use crate::error::InitError;

/// Maximum number of characters of a batch echoed to the log.
pub const PREVIEW_CHARS: usize = 200;

/// Opens sessions that differ only in their target database.
#[async_trait]
pub trait Connector: Send + Sync {
    type Session: Session;

    async fn connect(&self, database: &str) -> Result<Self::Session, DbError>;
}

/// One open server connection.
#[async_trait]
pub trait Session: Send + Sized {
    /// Whether the connection can still accept a batch. May round-trip to
    /// the server.
    async fn is_live(&mut self) -> bool;

    /// Run `sql` as a single server batch, consuming every result set.
    async fn execute_batch(&mut self, sql: &str) -> Result<(), DbError>;

    async fn close(self) -> Result<(), DbError>;
}

/// Decides which database each batch should run against.
///
/// Returning `None` keeps the current target.
pub trait TargetSelector: Send {
    fn select(&mut self, index: usize, batch: &str, current: &str) -> Option<String>;
}

/// Runs every batch against the default database.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepDefault;

impl TargetSelector for KeepDefault {
    fn select(&mut self, _index: usize, _batch: &str, _current: &str) -> Option<String> {
        None
    }
}

/// The live session and the database it targets.
pub struct ExecutionContext<S> {
    pub database: String,
    pub session: S,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionReport {
    pub total: usize,
    pub executed: usize,
    pub skipped: usize,
}

/// Executes batches strictly in order, failing fast.
pub struct SequentialExecutor<C, T = KeepDefault> {
    connector: C,
    default_database: String,
    selector: T,
}

impl<C: Connector> SequentialExecutor<C> {
    pub fn new(connector: C, default_database: impl Into<String>) -> Self {
        Self {
            connector,
            default_database: default_database.into(),
            selector: KeepDefault,
        }
    }
}

impl<C: Connector, T: TargetSelector> SequentialExecutor<C, T> {
    /// Replace the target selection policy.
    pub fn with_selector<U: TargetSelector>(self, selector: U) -> SequentialExecutor<C, U> {
        SequentialExecutor {
            connector: self.connector,
            default_database: self.default_database,
            selector,
        }
    }

    pub fn default_database(&self) -> &str {
        &self.default_database
    }

    /// Run `batches` in order.
    ///
    /// A connection to the default database is opened before the first
    /// batch, even when there are none to run.
    pub async fn execute(&mut self, batches: &[String]) -> Result<ExecutionReport, InitError> {
        let total = batches.len();
        let mut report = ExecutionReport {
            total,
            executed: 0,
            skipped: 0,
        };

        let mut context = self.open(self.default_database.clone()).await?;

        for (i, batch) in batches.iter().enumerate() {
            let index = i + 1;

            if batch.trim().is_empty() {
                report.skipped += 1;
                continue;
            }

            let target = self
                .selector
                .select(index, batch, &context.database)
                .unwrap_or_else(|| context.database.clone());

            if !context.session.is_live().await || context.database != target {
                tracing::debug!(from = %context.database, to = %target, "Reconnecting");
                close_quietly(context).await;
                context = self.open(target).await?;
            }

            tracing::info!(
                batch = index,
                total,
                database = %context.database,
                "Executing batch {index}/{total}\n{}",
                preview(batch)
            );

            if let Err(err) = context.session.execute_batch(batch).await {
                let database = context.database.clone();
                close_quietly(context).await;
                return Err(InitError::Batch {
                    index,
                    total,
                    database,
                    message: err.to_string(),
                });
            }

            tracing::info!(batch = index, "Batch {index} OK");
            report.executed += 1;
        }

        close_quietly(context).await;
        Ok(report)
    }

    async fn open(&self, database: String) -> Result<ExecutionContext<C::Session>, InitError> {
        match self.connector.connect(&database).await {
            Ok(session) => Ok(ExecutionContext { database, session }),
            Err(err) => Err(InitError::Connection {
                database,
                message: err.to_string(),
            }),
        }
    }
}

/// Close a context, logging and discarding any error.
async fn close_quietly<S: Session>(context: ExecutionContext<S>) {
    if let Err(err) = context.session.close().await {
        tracing::warn!(database = %context.database, error = %err, "Ignoring close failure");
    }
}

/// First [`PREVIEW_CHARS`] characters of `batch`, with `...` if cut.
pub fn preview(batch: &str) -> String {
    match batch.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &batch[..cut]),
        None => batch.to_string(),
    }
}
