//! SQL Server connector backed by `tiberius`.

use async_trait::async_trait;
use chronolog_db::{DbClient, DbConfig, DbError};
use futures::TryStreamExt;

use crate::executor::{Connector, Session};

/// Opens sessions with one shared set of connection parameters.
pub struct MssqlConnector {
    config: DbConfig,
}

impl MssqlConnector {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for MssqlConnector {
    type Session = MssqlSession;

    async fn connect(&self, database: &str) -> Result<MssqlSession, DbError> {
        let client = chronolog_db::connect(&self.config, database).await?;
        Ok(MssqlSession { client, live: true })
    }
}

/// A tiberius client plus a flag cleared once the socket is known dead.
///
/// tiberius exposes no connected-state query, so liveness is checked by
/// sending `SELECT 1` before each batch. A failed probe or a batch failing
/// with a connection-level error clears the flag for good.
pub struct MssqlSession {
    client: DbClient,
    live: bool,
}

#[async_trait]
impl Session for MssqlSession {
    async fn is_live(&mut self) -> bool {
        if self.live {
            if let Err(err) = chronolog_db::health_check(&mut self.client).await {
                tracing::warn!(error = %err, "Connection failed liveness check");
                self.live = false;
            }
        }
        self.live
    }

    async fn execute_batch(&mut self, sql: &str) -> Result<(), DbError> {
        let result = run_batch(&mut self.client, sql).await;
        if matches!(&result, Err(err) if err.is_connection_lost()) {
            self.live = false;
        }
        result
    }

    async fn close(self) -> Result<(), DbError> {
        self.client.close().await?;
        Ok(())
    }
}

/// Send `sql` as one batch and drain every result set so server-side errors
/// raised after the first statement still surface.
async fn run_batch(client: &mut DbClient, sql: &str) -> Result<(), DbError> {
    let mut stream = client.simple_query(sql).await?;
    while stream.try_next().await?.is_some() {}
    Ok(())
}
