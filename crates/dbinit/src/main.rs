use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chronolog_db::DbConfig;
use chronolog_dbinit::config::InitConfig;
use chronolog_dbinit::error::{InitError, EXIT_SUCCESS};
use chronolog_dbinit::executor::SequentialExecutor;
use chronolog_dbinit::mssql::MssqlConnector;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronolog_dbinit=debug,chronolog_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = InitConfig::from_env();
    tracing::info!(script = %config.script_path.display(), database = %config.default_database, "Loaded init configuration");

    // The script is checked before connection parameters so a missing file is
    // always reported as such.
    let script = match chronolog_dbinit::load_script(&config.script_path).await {
        Ok(script) => script,
        Err(err) => return fail(&err),
    };

    let db = match DbConfig::from_env() {
        Ok(db) => db,
        Err(err) => {
            return fail(&InitError::Connection {
                database: config.default_database,
                message: err.to_string(),
            })
        }
    };

    let mut executor = SequentialExecutor::new(MssqlConnector::new(db), config.default_database);

    match chronolog_dbinit::execute_script(&script, &mut executor).await {
        Ok(report) => {
            tracing::info!(
                executed = report.executed,
                skipped = report.skipped,
                "All batches executed successfully"
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &InitError) -> ExitCode {
    tracing::error!(error = %err, "Init failed");
    ExitCode::from(err.exit_code())
}
