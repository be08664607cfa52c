use super::super::common;
use anyhow::Result;
use mysql_probe::collectors::Collector;
use mysql_probe::collectors::config::CollectorSettings;
use mysql_probe::collectors::replication::ReplicaStatusCollector;
use secrecy::SecretString;
use serde_json::Value;

#[tokio::test]
async fn test_connection_failure_names_the_collector() {
    let settings = CollectorSettings::new(SecretString::new(common::unreachable_dsn().into()));
    let collector = ReplicaStatusCollector::new(&settings);

    let result = collector.fetch().await;

    assert!(result.is_err());
    let message = format!("{:?}", result.err());
    assert!(
        message.contains("mysql-replication fetch failed"),
        "error should carry the collector identity: {message}"
    );
}

#[tokio::test]
#[ignore = "requires a running MySQL/MariaDB server; set MYSQL_PROBE_DSN"]
async fn test_fetch_handles_no_replication() -> Result<()> {
    let pool = common::create_test_pool().await?;
    let is_replica = common::replication_configured(&pool).await?;
    pool.close().await;

    let settings = CollectorSettings::new(SecretString::new(common::get_test_dsn().into()));
    let collector = ReplicaStatusCollector::new(&settings);

    let event = collector.fetch().await?;

    if is_replica {
        assert!(event.contains_key("Slave_IO_Running"));
    } else {
        // Zero rows: the event carries no schema fields at all.
        assert!(event.is_empty());
    }

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running MySQL/MariaDB server; set MYSQL_PROBE_DSN"]
async fn test_fetch_with_raw_attaches_bucket() -> Result<()> {
    let settings = CollectorSettings::new(SecretString::new(common::get_test_dsn().into()))
        .with_raw_fields(true);
    let collector = ReplicaStatusCollector::new(&settings);

    let event = collector.fetch().await?;

    assert!(event.get("raw").is_some_and(Value::is_object));

    Ok(())
}
