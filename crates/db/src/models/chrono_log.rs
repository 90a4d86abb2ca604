//! Rows of `dbo.ChronoLog`, the recorder's raw payload store.

/// DTO for inserting a received `recordChrono` call.
#[derive(Debug, Clone)]
pub struct NewChronoLog {
    /// The caller's JSON-RPC id, rendered as text.
    pub json_rpc_id: String,
    /// JSON of `params.filter`, when present.
    pub filter: Option<String>,
    /// JSON of the complete `params` object.
    pub payload: String,
}
