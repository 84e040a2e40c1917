use std::time::Duration;

use super::*;

#[test]
fn defaults_resolve_without_any_source() {
    let settings = Settings::from_raw(RawSettings::default()).expect("settings");

    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:3000");
    assert_eq!(settings.server.graceful_shutdown, Duration::from_secs(30));
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.database.url, None);
    assert_eq!(settings.database.max_connections.get(), 8);
}

#[test]
fn zero_port_is_rejected() {
    let raw = RawSettings {
        server: RawServerSettings {
            port: Some(0),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(matches!(
        Settings::from_raw(raw),
        Err(LoadError::Invalid {
            key: "server.port",
            ..
        })
    ));
}

#[test]
fn zero_pool_size_is_rejected() {
    let raw = RawSettings {
        database: RawDatabaseSettings {
            max_connections: Some(0),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(matches!(
        Settings::from_raw(raw),
        Err(LoadError::Invalid {
            key: "database.max_connections",
            ..
        })
    ));
}

#[test]
fn unparseable_log_level_is_rejected() {
    let raw = RawSettings {
        logging: RawLoggingSettings {
            level: Some("loud".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(matches!(
        Settings::from_raw(raw),
        Err(LoadError::Invalid {
            key: "logging.level",
            ..
        })
    ));
}

#[test]
fn blank_database_url_is_treated_as_unset() {
    let raw = RawSettings {
        database: RawDatabaseSettings {
            url: Some("   ".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let settings = Settings::from_raw(raw).expect("settings");
    assert_eq!(settings.database.url, None);
}

#[test]
fn serve_overrides_take_precedence() {
    let mut raw = RawSettings::default();
    raw.server.host = Some("0.0.0.0".to_string());
    raw.database.url = Some("postgres://file/foglio".to_string());

    let overrides = ServeOverrides {
        server_port: Some(8080),
        log_level: Some("debug".to_string()),
        log_json: Some(true),
        database_url: Some("postgres://cli/foglio".to_string()),
        ..Default::default()
    };
    raw.apply_serve_overrides(&overrides);

    let settings = Settings::from_raw(raw).expect("settings");
    assert_eq!(settings.server.addr.to_string(), "0.0.0.0:8080");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert!(matches!(settings.logging.format, LogFormat::Json));
    assert_eq!(
        settings.database.url.as_deref(),
        Some("postgres://cli/foglio")
    );
}

#[test]
fn cli_parses_serve_subcommand() {
    let cli = CliArgs::try_parse_from([
        "foglio",
        "serve",
        "--server-port",
        "4000",
        "--database-url",
        "postgres://localhost/foglio",
    ])
    .expect("parse");

    match cli.command {
        Some(Command::Serve(args)) => {
            assert_eq!(args.overrides.server_port, Some(4000));
            assert_eq!(
                args.overrides.database_url.as_deref(),
                Some("postgres://localhost/foglio")
            );
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
