use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/clinic")])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            database_url: "postgres://localhost/clinic".to_owned(),
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/clinic"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", " 12 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
}

#[test]
fn from_lookup_requires_database_url() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[])), Err(ConfigError::Missing("DATABASE_URL")));
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])),
        Err(ConfigError::Missing("DATABASE_URL"))
    );
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn from_lookup_rejects_zero_connections() {
    let err = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("DB_MAX_CONNECTIONS", "0")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. }));
}

#[test]
fn blank_optional_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db"), ("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}
