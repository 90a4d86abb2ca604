pub mod chrono_log;
pub mod timelog;
