//! Application configuration resolved from environment variables.
//!
//! Every database parameter has a built-in default, so an empty environment
//! yields a working local-development configuration. An unset variable and a
//! variable set to the empty string are treated the same.

use std::env;

use thiserror::Error;
use tracing::debug;

const POSTGRES_HOST: &str = "POSTGRES_HOST";
const DEFAULT_POSTGRES_HOST: &str = "localhost";

const POSTGRES_PORT: &str = "POSTGRES_PORT";
const DEFAULT_POSTGRES_PORT: &str = "5432";

const POSTGRES_DB: &str = "POSTGRES_DB";
const DEFAULT_POSTGRES_DB: &str = "postgres";

const POSTGRES_USER: &str = "POSTGRES_USER";
const DEFAULT_POSTGRES_USER: &str = "postgres";

const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid port number: {source}")]
    InvalidPort {
        var: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub db: DbConfig,
}

/// Postgres connection parameters.
///
/// No validation beyond port parsing: host reachability and credential
/// correctness are the database server's problem, not ours. An empty
/// password means host-trust authentication.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db: DbConfig::from_env()?,
        })
    }
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default(POSTGRES_HOST, DEFAULT_POSTGRES_HOST);

        let port = env_or_default(POSTGRES_PORT, DEFAULT_POSTGRES_PORT)
            .parse()
            .map_err(|source| ConfigError::InvalidPort {
                var: POSTGRES_PORT,
                source,
            })?;

        let name = env_or_default(POSTGRES_DB, DEFAULT_POSTGRES_DB);
        let user = env_or_default(POSTGRES_USER, DEFAULT_POSTGRES_USER);

        // No default: empty is the unset value.
        let password = env::var(POSTGRES_PASSWORD).unwrap_or_default();

        Ok(Self {
            host,
            port,
            name,
            user,
            password,
        })
    }
}

/// Read an environment variable, falling back to `default` when it is unset
/// or empty.
fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            debug!("{key} is empty, using default value: {default}");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is shared state; serialize the tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: &[&str] = &[
        POSTGRES_HOST,
        POSTGRES_PORT,
        POSTGRES_DB,
        POSTGRES_USER,
        POSTGRES_PASSWORD,
    ];

    fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in ALL_VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        f();
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_yields_defaults() {
        with_env(&[], || {
            let db = DbConfig::from_env().unwrap();
            assert_eq!(db.host, "localhost");
            assert_eq!(db.port, 5432);
            assert_eq!(db.name, "postgres");
            assert_eq!(db.user, "postgres");
            assert_eq!(db.password, "");
        });
    }

    #[test]
    fn explicit_values_override_defaults() {
        with_env(
            &[
                (POSTGRES_HOST, "db.internal"),
                (POSTGRES_PORT, "6543"),
                (POSTGRES_DB, "app"),
                (POSTGRES_USER, "svc"),
                (POSTGRES_PASSWORD, "hunter2"),
            ],
            || {
                let db = DbConfig::from_env().unwrap();
                assert_eq!(db.host, "db.internal");
                assert_eq!(db.port, 6543);
                assert_eq!(db.name, "app");
                assert_eq!(db.user, "svc");
                assert_eq!(db.password, "hunter2");
            },
        );
    }

    #[test]
    fn empty_string_is_treated_as_unset() {
        with_env(
            &[
                (POSTGRES_HOST, ""),
                (POSTGRES_DB, ""),
                (POSTGRES_USER, ""),
            ],
            || {
                let db = DbConfig::from_env().unwrap();
                assert_eq!(db.host, "localhost");
                assert_eq!(db.name, "postgres");
                assert_eq!(db.user, "postgres");
            },
        );
    }

    #[test]
    fn non_numeric_port_fails_resolution() {
        with_env(&[(POSTGRES_PORT, "abc")], || {
            let err = DbConfig::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidPort {
                    var: "POSTGRES_PORT",
                    ..
                }
            ));
        });
    }

    #[test]
    fn config_wraps_db_config() {
        with_env(&[(POSTGRES_PORT, "6543")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.db.port, 6543);
        });
    }
}
