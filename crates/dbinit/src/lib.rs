//! Schema initialization: split a raw SQL Server script into batches and run
//! them one by one.

pub mod config;
pub mod error;
pub mod executor;
pub mod mssql;
pub mod splitter;

use std::path::Path;

use crate::error::InitError;
use crate::executor::{Connector, ExecutionReport, SequentialExecutor, TargetSelector};

/// Read the whole script. Any failure counts as missing input.
pub async fn load_script(path: &Path) -> Result<String, InitError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InitError::InputMissing {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Split `script` and execute the batches in order.
pub async fn execute_script<C, T>(
    script: &str,
    executor: &mut SequentialExecutor<C, T>,
) -> Result<ExecutionReport, InitError>
where
    C: Connector,
    T: TargetSelector,
{
    let batches = splitter::split_batches(script);
    tracing::info!(count = batches.len(), "Found {} batch(es) after processing", batches.len());

    executor.execute(&batches).await
}

/// Load the script at `path`, then split and execute it.
pub async fn run<C, T>(
    path: &Path,
    executor: &mut SequentialExecutor<C, T>,
) -> Result<ExecutionReport, InitError>
where
    C: Connector,
    T: TargetSelector,
{
    let script = load_script(path).await?;
    execute_script(&script, executor).await
}
