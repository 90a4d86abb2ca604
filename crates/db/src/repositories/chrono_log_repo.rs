//! Repository for the `dbo.ChronoLog` table.

use tiberius::Query;

use crate::client::DbClient;
use crate::error::DbError;
use crate::models::chrono_log::NewChronoLog;

/// Write access to the raw payload store.
pub struct ChronoLogRepo;

impl ChronoLogRepo {
    /// Store one received payload, stamped with the server's UTC clock.
    pub async fn insert(client: &mut DbClient, input: &NewChronoLog) -> Result<u64, DbError> {
        let mut query = Query::new(
            "INSERT INTO dbo.ChronoLog (ReceivedAt, JsonRpcId, Filter, Payload) \
             VALUES (SYSUTCDATETIME(), @P1, @P2, @P3)",
        );
        query.bind(input.json_rpc_id.clone());
        query.bind(input.filter.clone());
        query.bind(input.payload.clone());

        let result = query.execute(client).await?;
        Ok(result.total())
    }
}
