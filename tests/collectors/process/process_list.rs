use super::super::common;
use anyhow::Result;
use mysql_probe::collectors::Collector;
use mysql_probe::collectors::config::CollectorSettings;
use mysql_probe::collectors::process::ProcessListCollector;
use secrecy::SecretString;
use serde_json::Value;

#[tokio::test]
async fn test_connection_failure_names_the_collector() {
    let settings = CollectorSettings::new(SecretString::new(common::unreachable_dsn().into()));
    let collector = ProcessListCollector::new(&settings);

    let result = collector.fetch().await;

    assert!(result.is_err());
    let message = format!("{:?}", result.err());
    assert!(
        message.contains("mysql-process fetch failed"),
        "error should carry the collector identity: {message}"
    );
}

#[tokio::test]
async fn test_connection_failure_is_retried_next_cycle() {
    let settings = CollectorSettings::new(SecretString::new(common::unreachable_dsn().into()));
    let collector = ProcessListCollector::new(&settings);

    // The handle is never set on failure, so every cycle re-attempts
    // creation and reports the same wrapped error.
    assert!(collector.fetch().await.is_err());
    assert!(collector.fetch().await.is_err());
}

#[tokio::test]
#[ignore = "requires a running MySQL/MariaDB server; set MYSQL_PROBE_DSN"]
async fn test_fetch_returns_schema_shaped_event() -> Result<()> {
    let settings = CollectorSettings::new(SecretString::new(common::get_test_dsn().into()));
    let collector = ProcessListCollector::new(&settings);

    let event = collector.fetch().await?;

    // Our own query is in the process list, so these fields must be present.
    assert!(event.contains_key("ID"));
    assert!(event.contains_key("USER"));
    // Raw bucket only appears when asked for.
    assert!(!event.contains_key("raw"));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running MySQL/MariaDB server; set MYSQL_PROBE_DSN"]
async fn test_fetch_with_raw_attaches_bucket() -> Result<()> {
    let settings = CollectorSettings::new(SecretString::new(common::get_test_dsn().into()))
        .with_raw_fields(true);
    let collector = ProcessListCollector::new(&settings);

    let event = collector.fetch().await?;

    // Every returned column is schema-mapped, so the bucket is normally empty
    // but still present.
    assert!(event.get("raw").is_some_and(Value::is_object));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running MySQL/MariaDB server; set MYSQL_PROBE_DSN"]
async fn test_fetch_reuses_the_connection_handle() -> Result<()> {
    let settings = CollectorSettings::new(SecretString::new(common::get_test_dsn().into()));
    let collector = ProcessListCollector::new(&settings);

    let first = collector.fetch().await?;
    let second = collector.fetch().await?;

    assert!(first.contains_key("ID"));
    assert!(second.contains_key("ID"));

    Ok(())
}
