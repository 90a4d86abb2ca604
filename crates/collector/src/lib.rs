//! Time-log collector service.
//!
//! Reads recent rows from `dbo.TimeLog` and forwards them to the recorder
//! service as a `recordChrono` JSON-RPC call. The library exposes the
//! building blocks so integration tests and the binary share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod payload;
pub mod recorder;
pub mod router;
pub mod routes;
pub mod state;
