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

const PROCESS_LIST_QUERY: &str =
    "SELECT ID,USER,HOST,DB,COMMAND,TIME,STATE,INFO FROM INFORMATION_SCHEMA.PROCESSLIST";

/// Every column the fixed query returns; values pass through as strings.
static SCHEMA: Schema = Schema::new(&[
    ("ID", Rule::Str),
    ("USER", Rule::Str),
    ("HOST", Rule::Str),
    ("DB", Rule::Str),
    ("COMMAND", Rule::Str),
    ("TIME", Rule::Str),
    ("STATE", Rule::Str),
    ("INFO", Rule::Str),
]);

/// Collector for the server's in-flight process/connection list.
///
/// All returned rows fold into one field-keyed event, so with more than one
/// process row only the last row's values survive per field. That flat-map
/// accumulation is deliberate and load-bearing for downstream consumers.
#[derive(Clone)]
pub struct ProcessListCollector {
    dsn: SecretString,
    include_raw: bool,
    pool: OnceCell<MySqlPool>,
}

impl ProcessListCollector {
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
            .context("mysql-process fetch failed")
    }

    async fn fetch_event(&self) -> Result<Event> {
        let pool = self.pool().await?;
        let record = util::fetch_flat_record(pool, PROCESS_LIST_QUERY).await?;
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

impl Collector for ProcessListCollector {
    fn name(&self) -> &'static str {
        "process"
    }

    #[instrument(skip(self), level = "debug", fields(collector = "process"))]
    fn fetch(&self) -> BoxFuture<'_, Result<Event>> {
        Box::pin(self.fetch_event())
    }

    fn enabled_by_default(&self) -> bool {
        Self::ENABLED_BY_DEFAULT
    }
}
