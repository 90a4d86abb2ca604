use tiberius::Client;
use tokio::net::TcpStream;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::config::DbConfig;
use crate::error::DbError;

/// A live TDS connection.
pub type DbClient = Client<Compat<TcpStream>>;

/// Open a connection to `database` using the shared parameters in `config`.
#[tracing::instrument(skip(config), fields(host = %config.host, port = config.port))]
pub async fn connect(config: &DbConfig, database: &str) -> Result<DbClient, DbError> {
    let tds = config.tiberius_config(database);

    let tcp = TcpStream::connect(tds.get_addr()).await?;
    tcp.set_nodelay(true)?;

    let client = Client::connect(tds, tcp.compat_write()).await?;
    tracing::debug!("Connected to SQL Server");

    Ok(client)
}

/// Verify the connection can round-trip a trivial query.
pub async fn health_check(client: &mut DbClient) -> Result<(), DbError> {
    client.simple_query("SELECT 1").await?.into_row().await?;
    Ok(())
}

/// A single connection opened on first use and shared behind a mutex.
///
/// Callers that hit a connection-level error should call [`LazyClient::discard`]
/// so the next [`LazyClient::acquire`] reconnects.
pub struct LazyClient {
    config: DbConfig,
    slot: Mutex<Option<DbClient>>,
}

impl LazyClient {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            slot: Mutex::new(None),
        }
    }

    /// Lock the shared connection, connecting first if none is cached.
    pub async fn acquire(&self) -> Result<MappedMutexGuard<'_, DbClient>, DbError> {
        let mut guard = self.slot.lock().await;
        if guard.is_none() {
            *guard = Some(connect(&self.config, &self.config.database).await?);
        }
        MutexGuard::try_map(guard, |slot| slot.as_mut()).map_err(|_| DbError::Closed)
    }

    /// Drop the cached connection, if any.
    pub async fn discard(&self) {
        if let Some(client) = self.slot.lock().await.take() {
            if let Err(e) = client.close().await {
                tracing::warn!(error = %e, "Failed to close discarded connection");
            }
        }
    }
}
