//! Query functions, one repository struct per table.

pub mod chrono_log_repo;
pub mod timelog_repo;

pub use chrono_log_repo::ChronoLogRepo;
pub use timelog_repo::TimeLogRepo;
