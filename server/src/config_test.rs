use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("STORE_BACKEND");
        std::env::remove_var("SEED_DEVICES");
        std::env::remove_var("DB_MAX_CONNECTIONS");
    }
}

#[test]
fn from_env_defaults_to_seeded_memory_store() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            database_url: None,
            backend: StoreBackend::Memory,
            seed_devices: true,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    );
}

#[test]
fn from_env_selects_postgres_when_database_url_set() {
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/devices");
        std::env::set_var("PORT", "8080");
        std::env::set_var("DB_MAX_CONNECTIONS", "12");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.backend, StoreBackend::Postgres);
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/devices"));
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_memory_override_wins_over_database_url() {
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/devices");
        std::env::set_var("STORE_BACKEND", "memory");
        std::env::set_var("SEED_DEVICES", "false");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.backend, StoreBackend::Memory);
    assert!(!cfg.seed_devices);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_postgres_without_url_is_error() {
    unsafe {
        clear_server_env();
        std::env::set_var("STORE_BACKEND", "postgres");
    }

    assert_eq!(ServerConfig::from_env().unwrap_err(), ConfigError::MissingDatabaseUrl);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "not-a-port".into() });

    unsafe { clear_server_env() };
}

#[test]
fn parse_backend_rejects_unknown_value() {
    assert!(matches!(
        parse_backend(Some("cosmos"), false),
        Err(ConfigError::Invalid { var: "STORE_BACKEND", .. })
    ));
    assert_eq!(parse_backend(Some("Postgres"), false).unwrap(), StoreBackend::Postgres);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert!(parse_bool("X", Some("yes"), false).unwrap());
    assert!(!parse_bool("X", Some("0"), true).unwrap());
    assert!(parse_bool("X", None, true).unwrap());
    assert!(parse_bool("X", Some("maybe"), true).is_err());
}
