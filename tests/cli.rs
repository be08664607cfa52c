use mysql_probe::cli::{actions::Action, commands, dispatch};

#[test]
fn test_dsn_from_environment() {
    temp_env::with_var(
        "MYSQL_PROBE_DSN",
        Some("mysql://root@localhost:3306/mysql"),
        || {
            let matches = commands::new().get_matches_from(vec!["mysql_probe"]);
            let action = dispatch::handler(&matches);

            assert!(action.is_ok());
        },
    );
}

#[test]
fn test_missing_dsn_is_an_error() {
    temp_env::with_var("MYSQL_PROBE_DSN", None::<&str>, || {
        let matches = commands::new().get_matches_from(vec!["mysql_probe"]);
        let action = dispatch::handler(&matches);

        assert!(action.is_err());
    });
}

#[test]
fn test_raw_and_interval_from_environment() {
    temp_env::with_vars(
        [
            ("MYSQL_PROBE_DSN", Some("mysql://root@localhost:3306/mysql")),
            ("MYSQL_PROBE_RAW", Some("true")),
            ("MYSQL_PROBE_INTERVAL", Some("45")),
        ],
        || {
            let matches = commands::new().get_matches_from(vec!["mysql_probe"]);

            match dispatch::handler(&matches) {
                Ok(Action::Run {
                    interval,
                    raw,
                    collectors,
                    ..
                }) => {
                    assert_eq!(interval, 45);
                    assert!(raw);
                    assert_eq!(collectors.len(), 2);
                }
                Err(e) => unreachable!("handler should succeed: {e}"),
            }
        },
    );
}

#[test]
fn test_collector_toggles_reach_the_action() {
    temp_env::with_var(
        "MYSQL_PROBE_DSN",
        Some("mysql://root@localhost:3306/mysql"),
        || {
            let matches = commands::new()
                .get_matches_from(vec!["mysql_probe", "--no-collector.process"]);

            match dispatch::handler(&matches) {
                Ok(Action::Run { collectors, .. }) => {
                    assert_eq!(collectors, vec!["replication".to_string()]);
                }
                Err(e) => unreachable!("handler should succeed: {e}"),
            }
        },
    );
}
