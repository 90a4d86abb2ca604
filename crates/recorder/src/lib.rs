//! Chrono recorder service.
//!
//! Accepts `recordChrono` JSON-RPC calls and stores their parameters
//! verbatim in `dbo.ChronoLog`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
