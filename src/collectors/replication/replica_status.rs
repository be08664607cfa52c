use crate::collectors::Collector;
use crate::collectors::config::CollectorSettings;
use crate::collectors::schema::{Event, RawRecord, Rule, Schema};
use crate::collectors::util;
use anyhow::{Context as _, Result};
use futures::future::BoxFuture;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::MySqlPool;
use tokio::sync::OnceCell;
use tracing::instrument;

const REPLICA_STATUS_QUERY: &str = "SHOW SLAVE STATUS";

/// The full field set `SHOW SLAVE STATUS` reports: connection coordinates,
/// log positions, per-thread running flags, error triples for the I/O and SQL
/// threads, SSL configuration, GTID sets, delay settings, channel name.
/// Values pass through as strings; fields a newer server adds beyond this set
/// surface through the `raw` bucket.
static SCHEMA: Schema = Schema::new(&[
    ("Slave_IO_State", Rule::Str),
    ("Master_Host", Rule::Str),
    ("Master_User", Rule::Str),
    ("Master_Port", Rule::Str),
    ("Connect_Retry", Rule::Str),
    ("Master_Log_File", Rule::Str),
    ("Read_Master_Log_Pos", Rule::Str),
    ("Relay_Log_File", Rule::Str),
    ("Relay_Log_Pos", Rule::Str),
    ("Relay_Master_Log_File", Rule::Str),
    ("Slave_IO_Running", Rule::Str),
    ("Slave_SQL_Running", Rule::Str),
    ("Replicate_Do_DB", Rule::Str),
    ("Replicate_Ignore_DB", Rule::Str),
    ("Replicate_Do_Table", Rule::Str),
    ("Replicate_Ignore_Table", Rule::Str),
    ("Replicate_Wild_Do_Table", Rule::Str),
    ("Replicate_Wild_Ignore_Table", Rule::Str),
    ("Last_Errno", Rule::Str),
    ("Last_Error", Rule::Str),
    ("Skip_Counter", Rule::Str),
    ("Exec_Master_Log_Pos", Rule::Str),
    ("Relay_Log_Space", Rule::Str),
    ("Until_Condition", Rule::Str),
    ("Until_Log_File", Rule::Str),
    ("Until_Log_Pos", Rule::Str),
    ("Master_SSL_Allowed", Rule::Str),
    ("Master_SSL_CA_File", Rule::Str),
    ("Master_SSL_CA_Path", Rule::Str),
    ("Master_SSL_Cert", Rule::Str),
    ("Master_SSL_Cipher", Rule::Str),
    ("Master_SSL_Key", Rule::Str),
    ("Seconds_Behind_Master", Rule::Str),
    ("Master_SSL_Verify_Server_Cert", Rule::Str),
    ("Last_IO_Errno", Rule::Str),
    ("Last_IO_Error", Rule::Str),
    ("Last_SQL_Errno", Rule::Str),
    ("Last_SQL_Error", Rule::Str),
    ("Replicate_Ignore_Server_Ids", Rule::Str),
    ("Master_Server_Id", Rule::Str),
    ("Master_UUID", Rule::Str),
    ("Master_Info_File", Rule::Str),
    ("SQL_Delay", Rule::Str),
    ("SQL_Remaining_Delay", Rule::Str),
    ("Slave_SQL_Running_State", Rule::Str),
    ("Master_Retry_Count", Rule::Str),
    ("Master_Bind", Rule::Str),
    ("Last_IO_Error_Timestamp", Rule::Str),
    ("Last_SQL_Error_Timestamp", Rule::Str),
    ("Master_SSL_Crl", Rule::Str),
    ("Master_SSL_Crlpath", Rule::Str),
    ("Retrieved_Gtid_Set", Rule::Str),
    ("Executed_Gtid_Set", Rule::Str),
    ("Auto_Position", Rule::Str),
    ("Replicate_Rewrite_DB", Rule::Str),
    ("Channel_Name", Rule::Str),
    ("Master_TLS_Version", Rule::Str),
]);

/// Collector for a replica's replication state relative to its primary.
///
/// The status query returns at most one row; a server with no replication
/// configured returns none, and the emitted event then carries no schema
/// fields at all rather than fields with empty values.
#[derive(Clone)]
pub struct ReplicaStatusCollector {
    dsn: SecretString,
    include_raw: bool,
    pool: OnceCell<MySqlPool>,
}

impl ReplicaStatusCollector {
    pub const ENABLED_BY_DEFAULT: bool = true;

    #[must_use]
    pub fn new(settings: &CollectorSettings) -> Self {
        Self {
            dsn: settings.dsn.clone(),
            include_raw: settings.include_raw,
            pool: OnceCell::new(),
        }
    }

    /// First call opens the handle; later calls reuse it. A creation failure
    /// leaves the cell unset so the next cycle retries.
    async fn pool(&self) -> Result<&MySqlPool> {
        self.pool
            .get_or_try_init(|| util::connect(&self.dsn))
            .await
            .context("mysql-replication fetch failed")
    }

    async fn fetch_event(&self) -> Result<Event> {
        let pool = self.pool().await?;
        let record = util::fetch_flat_record(pool, REPLICA_STATUS_QUERY).await?;
        Ok(shape_event(&record, self.include_raw))
    }
}

fn shape_event(record: &RawRecord, include_raw: bool) -> Event {
    let mut event = SCHEMA.apply(record);
    if include_raw {
        event.insert("raw".to_string(), Value::Object(SCHEMA.raw_fields(record)));
    }
    event
}

impl Collector for ReplicaStatusCollector {
    fn name(&self) -> &'static str {
        "replication"
    }

    #[instrument(skip(self), level = "debug", fields(collector = "replication"))]
    fn fetch(&self) -> BoxFuture<'_, Result<Event>> {
        Box::pin(self.fetch_event())
    }

    fn enabled_by_default(&self) -> bool {
        Self::ENABLED_BY_DEFAULT
    }
}
