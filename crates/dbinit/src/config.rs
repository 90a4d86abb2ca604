use std::path::PathBuf;

/// Settings specific to the initialization utility.
///
/// Connection parameters come from [`chronolog_db::DbConfig`].
#[derive(Debug, Clone)]
pub struct InitConfig {
    /// Script to execute (default: `sql/db_init.sql`).
    pub script_path: PathBuf,
    /// Database the executor starts on (default: `master`).
    pub default_database: String,
}

impl InitConfig {
    /// | Env Var            | Default           |
    /// |--------------------|-------------------|
    /// | `DB_INIT_SCRIPT`   | `sql/db_init.sql` |
    /// | `DB_INIT_DATABASE` | `master`          |
    pub fn from_env() -> Self {
        let script_path = std::env::var("DB_INIT_SCRIPT")
            .unwrap_or_else(|_| "sql/db_init.sql".into())
            .into();
        let default_database =
            std::env::var("DB_INIT_DATABASE").unwrap_or_else(|_| "master".into());

        Self {
            script_path,
            default_database,
        }
    }
}
