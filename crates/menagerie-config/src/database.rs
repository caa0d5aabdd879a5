//! Database connection settings.
//!
//! # Environment Variables
//!
//! | Variable             | Default          | Notes                                   |
//! |----------------------|------------------|-----------------------------------------|
//! | `DATABASE_URL`       | unset            | `mysql://...`, overrides the parts below |
//! | `DBUSER`             | required         | required unless `DATABASE_URL` is set   |
//! | `DBPASS`             | empty            |                                         |
//! | `DBADDR`             | `127.0.0.1:3306` | `host:port`, port optional              |
//! | `DBNAME`             | `goapp`          |                                         |
//! | `DB_MAX_CONNECTIONS` | `10`             |                                         |
//! | `SCHEMA_MODE`        | `if-not-exists`  | `strict` or `if-not-exists`             |

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3306";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DATABASE: &str = "goapp";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How the `animals` table is created at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchemaMode {
    /// Plain `CREATE TABLE`; startup fails if the table already exists.
    Strict,
    /// `CREATE TABLE IF NOT EXISTS`.
    #[default]
    IfNotExists,
}

impl FromStr for SchemaMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "if-not-exists" | "if_not_exists" => Ok(Self::IfNotExists),
            other => Err(anyhow!(
                "SCHEMA_MODE must be `strict` or `if-not-exists`, got `{other}`"
            )),
        }
    }
}

impl fmt::Display for SchemaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::IfNotExists => f.write_str("if-not-exists"),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub schema_mode: SchemaMode,
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());

        let user = match lookup("DBUSER") {
            Some(user) => user,
            None if url.is_some() => String::new(),
            None => bail!("DBUSER must be set when DATABASE_URL is not"),
        };

        let addr = lookup("DBADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let (host, port) = parse_addr(&addr)?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a number, got `{raw}`"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let schema_mode = lookup("SCHEMA_MODE")
            .map(|raw| raw.parse::<SchemaMode>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            url,
            user,
            password: lookup("DBPASS").unwrap_or_default(),
            host,
            port,
            name: lookup("DBNAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            max_connections,
            schema_mode,
        })
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("schema_mode", &self.schema_mode)
            .finish_non_exhaustive()
    }
}

/// Splits `host:port`; a bare host gets the MySQL default port.
fn parse_addr(addr: &str) -> anyhow::Result<(String, u16)> {
    let addr = addr.trim();
    if addr.is_empty() {
        bail!("DBADDR must not be empty");
    }

    match addr.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => {
            let port = port
                .parse()
                .with_context(|| format!("DBADDR port must be a number, got `{port}`"))?;
            Ok((host.to_string(), port))
        }
        Some(_) => bail!("DBADDR is missing a host: `{addr}`"),
        None => Ok((addr.to_string(), DEFAULT_PORT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_user() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("DBUSER", "zoo")])).unwrap();

        assert_eq!(config.user, "zoo");
        assert_eq!(config.password, "");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3306);
        assert_eq!(config.name, "goapp");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.schema_mode, SchemaMode::IfNotExists);
        assert!(config.url.is_none());
    }

    #[test]
    fn test_missing_user_is_an_error() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[("DBPASS", "secret")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_database_url_makes_user_optional() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "mysql://root:pw@db:3306/goapp",
        )]))
        .unwrap();

        assert_eq!(config.url.as_deref(), Some("mysql://root:pw@db:3306/goapp"));
        assert_eq!(config.user, "");
    }

    #[test]
    fn test_all_parts_parsed() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("DBUSER", "keeper"),
            ("DBPASS", "hunter2"),
            ("DBADDR", "mysql.internal:3307"),
            ("DBNAME", "zoo"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("SCHEMA_MODE", "strict"),
        ]))
        .unwrap();

        assert_eq!(config.password, "hunter2");
        assert_eq!(config.host, "mysql.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.name, "zoo");
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.schema_mode, SchemaMode::Strict);
    }

    #[test]
    fn test_addr_without_port_uses_default() {
        assert_eq!(
            parse_addr("localhost").unwrap(),
            ("localhost".to_string(), DEFAULT_PORT)
        );
    }

    #[test]
    fn test_addr_with_bad_port_is_an_error() {
        assert!(parse_addr("localhost:mysql").is_err());
        assert!(parse_addr(":3306").is_err());
        assert!(parse_addr("   ").is_err());
    }

    #[test]
    fn test_invalid_schema_mode_is_an_error() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[
            ("DBUSER", "zoo"),
            ("SCHEMA_MODE", "sometimes"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_mode_round_trips_through_display() {
        for mode in [SchemaMode::Strict, SchemaMode::IfNotExists] {
            assert_eq!(mode.to_string().parse::<SchemaMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("DBUSER", "zoo"),
            ("DBPASS", "hunter2"),
        ]))
        .unwrap();

        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
