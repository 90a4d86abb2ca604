//! Domain types shared by the collector and recorder services.

pub mod error;
pub mod jsonrpc;
pub mod timelog;
pub mod types;
