use std::path::PathBuf;

/// Exit status when every batch ran.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the script could not be read.
pub const EXIT_INPUT_MISSING: u8 = 1;
/// Exit status when a connection could not be opened or a batch failed.
pub const EXIT_FAILED: u8 = 2;

/// Fatal outcomes of an initialization run.
///
/// Every variant stops the run. Close failures are never represented here;
/// they are logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The script was absent or unreadable. Raised before any connection.
    #[error("SQL file not found: {} ({reason})", path.display())]
    InputMissing { path: PathBuf, reason: String },

    /// Opening or reopening a connection failed.
    #[error("Failed to connect to DB={database}: {message}")]
    Connection { database: String, message: String },

    /// The server rejected a batch. `index` is 1-based.
    #[error("Error executing batch {index}/{total} on DB={database}: {message}")]
    Batch {
        index: usize,
        total: usize,
        database: String,
        message: String,
    },
}

impl InitError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            InitError::InputMissing { .. } => EXIT_INPUT_MISSING,
            InitError::Connection { .. } | InitError::Batch { .. } => EXIT_FAILED,
        }
    }
}
