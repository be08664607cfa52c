use secrecy::SecretString;
use std::collections::HashSet;

/// Which collectors the application enables.
#[derive(Clone, Debug, Default)]
pub struct CollectorConfig {
    pub enabled_collectors: HashSet<String>,
}

impl CollectorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enabled(mut self, collectors: &[String]) -> Self {
        self.enabled_collectors = collectors.iter().cloned().collect();
        self
    }

    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled_collectors.contains(name)
    }
}

/// Per-instance settings handed to collector constructors.
#[derive(Clone, Debug)]
pub struct CollectorSettings {
    /// Connection URI; the collector opens its handle lazily on first fetch.
    pub dsn: SecretString,
    /// Attach unrecognized source fields under a nested `raw` key.
    pub include_raw: bool,
}

impl CollectorSettings {
    #[must_use]
    pub const fn new(dsn: SecretString) -> Self {
        Self {
            dsn,
            include_raw: false,
        }
    }

    #[must_use]
    pub const fn with_raw_fields(mut self, include_raw: bool) -> Self {
        self.include_raw = include_raw;
        self
    }
}
