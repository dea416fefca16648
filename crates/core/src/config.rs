//! Database connection settings read from the environment.
//!
//! # Environment variables
//!
//! | Variable        | Required | Default       | Description                                  |
//! |-----------------|----------|---------------|----------------------------------------------|
//! | `DATABASE_URL`  | no       | --            | Full connection URL; the rest is then ignored|
//! | `SQL_SERVER`    | no       | `localhost`   | Database host                                |
//! | `SQL_PORT`      | no       | `5432`        | Database port                                |
//! | `SQL_DB`        | no       | `DemoStaging` | Database name                                |
//! | `SQL_TRUSTED`   | no       | `true`        | `1`/`true`/`yes` to skip explicit credentials|
//! | `SQL_USER`      | if untrusted | --        | Login user                                   |
//! | `SQL_PASSWORD`  | no       | --            | Login password                               |
//! | `SQL_DRIVER`    | no       | `postgres`    | Driver name; only postgres is supported      |

use std::fmt;

use crate::error::ConfigError;

const DEFAULT_SERVER: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DATABASE: &str = "DemoStaging";
const DEFAULT_DRIVER: &str = "postgres";

const SUPPORTED_DRIVERS: [&str; 2] = ["postgres", "postgresql"];

/// How the job authenticates against the server.
#[derive(Clone, PartialEq, Eq)]
pub enum DbAuth {
    /// No explicit credentials. The driver resolves the user from `PGUSER`
    /// or the OS account and the password from `~/.pgpass`.
    Trusted,
    Credentials {
        user: String,
        password: Option<String>,
    },
}

impl fmt::Debug for DbAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trusted => f.write_str("Trusted"),
            Self::Credentials { user, password } => f
                .debug_struct("Credentials")
                .field("user", user)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// Connection parameters shared by both jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub auth: DbAuth,
    /// When present, used verbatim instead of the individual fields.
    pub database_url: Option<String>,
}

impl DbConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// A non-empty `DATABASE_URL` carries host, credentials and driver
    /// itself, so the `SQL_*` variables are neither validated nor used.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            return Ok(Self {
                host: DEFAULT_SERVER.to_string(),
                port: DEFAULT_PORT,
                database: DEFAULT_DATABASE.to_string(),
                auth: DbAuth::Trusted,
                database_url: Some(url),
            });
        }

        let driver = lookup("SQL_DRIVER").unwrap_or_else(|| DEFAULT_DRIVER.to_string());
        if !SUPPORTED_DRIVERS
            .iter()
            .any(|d| d.eq_ignore_ascii_case(driver.trim()))
        {
            return Err(ConfigError::UnsupportedDriver(driver));
        }

        let port = match lookup("SQL_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "SQL_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let trusted = lookup("SQL_TRUSTED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let auth = if trusted {
            DbAuth::Trusted
        } else {
            let user = lookup("SQL_USER")
                .filter(|u| !u.is_empty())
                .ok_or(ConfigError::MissingVar("SQL_USER"))?;
            DbAuth::Credentials {
                user,
                password: lookup("SQL_PASSWORD"),
            }
        };

        Ok(Self {
            host: lookup("SQL_SERVER").unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            port,
            database: lookup("SQL_DB").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            auth,
            database_url: None,
        })
    }
}

/// `1`, `true` and `yes` (any case) are truthy; everything else is false.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
