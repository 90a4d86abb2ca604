/// Errors from the database layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Connection parameters are missing or malformed.
    #[error("Invalid database configuration: {0}")]
    Config(String),

    /// An error reported by the TDS driver or the server.
    #[error(transparent)]
    Tiberius(#[from] tiberius::error::Error),

    /// Socket-level failure while connecting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A NOT NULL column came back as NULL or with an unexpected type.
    #[error("Unexpected NULL in column {0}")]
    UnexpectedNull(&'static str),

    /// The connection was used after it was closed.
    #[error("Connection is closed")]
    Closed,
}

impl DbError {
    /// Whether the error leaves the underlying connection unusable.
    pub fn is_connection_lost(&self) -> bool {
        match self {
            DbError::Io(_) | DbError::Closed => true,
            DbError::Tiberius(err) => matches!(err, tiberius::error::Error::Io { .. }),
            DbError::Config(_) | DbError::UnexpectedNull(_) => false,
        }
    }
}
