//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("STORE_BACKEND=postgres requires DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Where device records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub backend: StoreBackend,
    pub seed_devices: bool,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: Postgres connection string
    /// - `STORE_BACKEND`: `memory` or `postgres`; defaults to `postgres` when
    ///   `DATABASE_URL` is set, otherwise `memory`
    /// - `SEED_DEVICES`: load sample devices into the memory store, default true
    /// - `DB_MAX_CONNECTIONS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable values or a Postgres backend
    /// without a database URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let database_url = std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        let backend = parse_backend(std::env::var("STORE_BACKEND").ok().as_deref(), database_url.is_some())?;
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        let seed_devices = parse_bool("SEED_DEVICES", std::env::var("SEED_DEVICES").ok().as_deref(), true)?;
        let db_max_connections = env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        Ok(Self { port, database_url, backend, seed_devices, db_max_connections })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

fn parse_backend(raw: Option<&str>, has_database_url: bool) -> Result<StoreBackend, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(if has_database_url { StoreBackend::Postgres } else { StoreBackend::Memory }),
        Some(value) if value.eq_ignore_ascii_case("memory") => Ok(StoreBackend::Memory),
        Some(value) if value.eq_ignore_ascii_case("postgres") => Ok(StoreBackend::Postgres),
        Some(other) => Err(ConfigError::Invalid { var: "STORE_BACKEND", value: other.to_owned() }),
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
