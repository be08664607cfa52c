//! Field-name-driven projection from flat key/value records to structured
//! events:
//! - A [`Schema`] is a fixed, ordered list of known field names, each paired
//!   with an extraction [`Rule`].
//! - [`Schema::apply`] builds the event from the recognized fields;
//!   [`Schema::raw_fields`] collects the leftovers for the `raw` bucket.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// One database row (or several, folded) decoded into field name → text value.
///
/// Values are always present as strings; a SQL NULL decodes to an empty
/// string, never a missing key.
pub type RawRecord = BTreeMap<String, String>;

/// A structured event as handed back to the collection loop.
pub type Event = serde_json::Map<String, Value>;

/// Extraction rule for a single schema field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Keep the source string unchanged.
    Str,
    /// Parse as a base-10 signed integer.
    Int,
    /// Parse as elapsed seconds, either a plain integer count or an
    /// `H:MM:SS` clock form.
    Duration,
}

impl Rule {
    fn convert(self, field: &str, raw: &str) -> Option<Value> {
        match self {
            Self::Str => Some(Value::String(raw.to_owned())),
            Self::Int => match raw.parse::<i64>() {
                Ok(v) => Some(Value::from(v)),
                Err(_) => {
                    debug!(field, value = raw, "could not parse integer field");
                    None
                }
            },
            Self::Duration => match parse_seconds(raw) {
                Some(v) => Some(Value::from(v)),
                None => {
                    debug!(field, value = raw, "could not parse duration field");
                    None
                }
            },
        }
    }
}

/// Total seconds from `"SS"` or `"H:MM:SS"` (hours unbounded).
fn parse_seconds(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let mut parts = raw.splitn(3, ':');
    let hours = parts.next()?.parse::<i64>().ok()?;
    let minutes = parts.next()?.parse::<i64>().ok()?;
    let seconds = parts.next()?.parse::<i64>().ok()?;
    if !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// An ordered mapping from canonical field name to extraction rule.
///
/// The key set is fixed at construction and never mutated; lookups are
/// case-sensitive exact match.
pub struct Schema {
    fields: &'static [(&'static str, Rule)],
}

impl Schema {
    #[must_use]
    pub const fn new(fields: &'static [(&'static str, Rule)]) -> Self {
        Self { fields }
    }

    /// Whether `key` is a recognized schema field.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == key)
    }

    /// Schema field names, in declaration order.
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Project `record` through the schema.
    ///
    /// The result contains at most the schema's keys: a field is present
    /// exactly when the record has it and its rule's conversion succeeds.
    /// Missing record keys produce absent fields, not placeholders.
    #[must_use]
    pub fn apply(&self, record: &RawRecord) -> Event {
        let mut event = Event::new();
        for (name, rule) in self.fields {
            if let Some(raw) = record.get(*name)
                && let Some(value) = rule.convert(name, raw)
            {
                event.insert((*name).to_owned(), value);
            }
        }
        event
    }

    /// The record entries the schema does not recognize, values unchanged.
    ///
    /// Together with [`Schema::apply`] this partitions the record: every key
    /// lands in exactly one of the two outputs.
    #[must_use]
    pub fn raw_fields(&self, record: &RawRecord) -> Event {
        let mut leftovers = Event::new();
        for (key, value) in record {
            if self.has_key(key) {
                continue;
            }
            leftovers.insert(key.clone(), Value::String(value.clone()));
        }
        leftovers
    }
}
