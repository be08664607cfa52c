//! The collection loop: builds the enabled collector set and, on a fixed
//! interval, fetches one event per collector and writes it to stdout as a
//! JSON line. Logs go to stderr so the event stream stays clean.

use crate::collectors::{
    COLLECTOR_NAMES, Collector, CollectorType, all_factories,
    config::{CollectorConfig, CollectorSettings},
    schema::Event,
    util,
};
use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

/// One emitted line: envelope metadata plus the collector's event.
///
/// The `event` object itself carries only schema field names (plus the
/// optional nested `raw` bucket); everything else lives in the envelope.
#[derive(Serialize)]
struct Envelope<'a> {
    timestamp: DateTime<Utc>,
    collector: &'a str,
    event: &'a Event,
}

/// Build the enabled collectors and run the collection loop until ctrl-c.
///
/// Fetches for each collector instance run serially within a cycle. A fetch
/// failure is logged with the collector identity and the loop moves on; the
/// next cycle is the implicit retry.
///
/// # Errors
///
/// Returns an error if no collector is enabled or the event stream can no
/// longer be written.
pub async fn new(
    dsn: SecretString,
    every: Duration,
    include_raw: bool,
    collectors: &[String],
) -> Result<()> {
    let settings = CollectorSettings::new(dsn).with_raw_fields(include_raw);
    let config = CollectorConfig::new().with_enabled(collectors);
    let factories = all_factories();

    let active: Vec<CollectorType> = COLLECTOR_NAMES
        .iter()
        .copied()
        .filter(|&name| config.is_enabled(name))
        .filter_map(|name| factories.get(name).map(|factory| factory(&settings)))
        .collect();

    if active.is_empty() {
        bail!("no collectors enabled");
    }

    info!(
        target = %util::redact_dsn(&settings.dsn),
        interval_secs = every.as_secs(),
        collectors = ?active.iter().map(Collector::name).collect::<Vec<_>>(),
        "starting collection loop"
    );

    let mut ticker = time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for collector in &active {
                    match collector.fetch().await {
                        Ok(event) => emit(collector.name(), &event)?,
                        Err(e) => {
                            warn!(
                                collector = collector.name(),
                                error = %e,
                                "fetch failed; will retry next cycle"
                            );
                        }
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

fn emit(collector: &str, event: &Event) -> Result<()> {
    let line = serde_json::to_string(&Envelope {
        timestamp: Utc::now(),
        collector,
        event,
    })?;

    let mut out = std::io::stdout().lock();
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;

    Ok(())
}
