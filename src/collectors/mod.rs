use crate::collectors::config::CollectorSettings;
use crate::collectors::schema::Event;
use anyhow::Result;
use futures::future::BoxFuture;
use std::collections::HashMap;

#[macro_use]
mod register_macro;

pub trait Collector {
    fn name(&self) -> &'static str;

    /// Fetch one structured event from the server.
    ///
    /// The first call opens the instance's connection handle; later calls
    /// reuse it. Calls for one instance are expected to be serialized by the
    /// surrounding loop.
    fn fetch(&self) -> BoxFuture<'_, Result<Event>>;

    fn enabled_by_default(&self) -> bool {
        false
    }
}

pub mod schema;
pub mod util;

register_collectors! {
    process => ProcessListCollector,
    replication => ReplicaStatusCollector,
}

pub mod config;
