//! SQL Server access shared by the collector, the recorder and the
//! initialization utility.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

pub use client::{connect, health_check, DbClient, LazyClient};
pub use config::DbConfig;
pub use error::DbError;
