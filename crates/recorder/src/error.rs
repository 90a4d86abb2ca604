use chronolog_core::error::CoreError;
use chronolog_core::jsonrpc::{INVALID_PARAMS, SERVER_ERROR};
use chronolog_db::DbError;

/// Failure of a `recordChrono` call, reported inside the JSON-RPC reply.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DbError),
}

impl RecordError {
    /// JSON-RPC error code for this failure.
    pub fn rpc_code(&self) -> i32 {
        match self {
            RecordError::Core(CoreError::Validation(_)) => INVALID_PARAMS,
            RecordError::Core(CoreError::Internal(_)) | RecordError::Database(_) => SERVER_ERROR,
        }
    }
}
