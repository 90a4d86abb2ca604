use tiberius::{AuthMethod, Config, EncryptionLevel};

use crate::error::DbError;

/// SQL Server connection parameters.
///
/// Every connection opened from one `DbConfig` shares host, credentials and
/// driver options; only the database name varies per connection.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Server hostname (default: `localhost`).
    pub host: String,
    /// Server port (default: `1433`).
    pub port: u16,
    /// SQL login name (default: `sa`).
    pub user: String,
    /// SQL login password. Required.
    pub password: String,
    /// Database the services connect to (default: `master`).
    pub database: String,
    /// Accept the server certificate without validation (default: `true`).
    pub trust_cert: bool,
    /// Encrypt the whole session rather than just the login (default: `false`).
    pub encrypt: bool,
}

impl DbConfig {
    /// Load connection parameters from environment variables.
    ///
    /// | Env Var         | Default     |
    /// |-----------------|-------------|
    /// | `DB_HOST`       | `localhost` |
    /// | `DB_PORT`       | `1433`      |
    /// | `DB_USER`       | `sa`        |
    /// | `DB_PASS`       | (required)  |
    /// | `DB_NAME`       | `master`    |
    /// | `DB_TRUST_CERT` | `true`      |
    /// | `DB_ENCRYPT`    | `false`     |
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load connection parameters through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DbError> {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| DbError::Config(format!("DB_PORT must be a valid u16, got '{raw}'")))?,
            None => 1433,
        };

        let user = lookup("DB_USER").unwrap_or_else(|| "sa".into());
        let password =
            lookup("DB_PASS").ok_or_else(|| DbError::Config("DB_PASS must be set".into()))?;
        let database = lookup("DB_NAME").unwrap_or_else(|| "master".into());

        let trust_cert = parse_flag(lookup("DB_TRUST_CERT"), true);
        let encrypt = parse_flag(lookup("DB_ENCRYPT"), false);

        Ok(Self {
            host,
            port,
            user,
            password,
            database,
            trust_cert,
            encrypt,
        })
    }

    /// Build the driver configuration targeting `database`.
    pub fn tiberius_config(&self, database: &str) -> Config {
        let mut config = Config::new();
        config.host(&self.host);
        config.port(self.port);
        config.database(database);
        config.authentication(AuthMethod::sql_server(&self.user, &self.password));

        if self.trust_cert {
            config.trust_cert();
        }

        config.encryption(if self.encrypt {
            EncryptionLevel::Required
        } else {
            EncryptionLevel::Off
        });

        config
    }
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_password_is_set() {
        let config = DbConfig::from_lookup(lookup(&[("DB_PASS", "secret")])).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 1433);
        assert_eq!(config.user, "sa");
        assert_eq!(config.database, "master");
        assert!(config.trust_cert);
        assert!(!config.encrypt);
    }

    #[test]
    fn missing_password_is_a_config_error() {
        let err = DbConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_matches!(err, DbError::Config(msg) if msg.contains("DB_PASS"));
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err =
            DbConfig::from_lookup(lookup(&[("DB_PASS", "x"), ("DB_PORT", "http")])).unwrap_err();
        assert_matches!(err, DbError::Config(_));
    }

    #[test]
    fn overrides_are_read() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_HOST", "sql.internal"),
            ("DB_PORT", "14330"),
            ("DB_USER", "loader"),
            ("DB_PASS", "pw"),
            ("DB_NAME", "Chrono"),
            ("DB_TRUST_CERT", "false"),
            ("DB_ENCRYPT", "1"),
        ]))
        .unwrap();
        assert_eq!(config.host, "sql.internal");
        assert_eq!(config.port, 14330);
        assert_eq!(config.user, "loader");
        assert_eq!(config.database, "Chrono");
        assert!(!config.trust_cert);
        assert!(config.encrypt);
    }

    #[test]
    fn tiberius_config_targets_requested_database() {
        let config = DbConfig::from_lookup(lookup(&[("DB_PASS", "pw"), ("DB_PORT", "1500")])).unwrap();
        let tds = config.tiberius_config("Other");
        assert_eq!(tds.get_addr(), "localhost:1500");
    }
}
