use crate::cli::actions::Action;
use crate::collectors::{COLLECTOR_NAMES, enabled_by_default};
use anyhow::{Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
///
/// Returns an error if required arguments are missing
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    // Get the DSN or return an error
    let dsn = SecretString::from(
        matches
            .get_one::<String>("dsn")
            .cloned()
            .ok_or_else(|| anyhow!("DSN is required. Please provide it using the --dsn flag."))?,
    );

    let interval = matches.get_one::<u64>("interval").copied().ok_or_else(|| {
        anyhow!("Interval is required. Please provide it using the --interval flag.")
    })?;

    Ok(Action::Run {
        dsn,
        interval,
        raw: matches.get_flag("raw"),
        collectors: get_enabled_collectors(matches),
    })
}

#[must_use]
pub fn get_enabled_collectors(matches: &ArgMatches) -> Vec<String> {
    COLLECTOR_NAMES
        .iter()
        .filter(|&name| {
            let enable_flag = format!("collector.{name}");
            let disable_flag = format!("no-collector.{name}");

            // If explicitly disabled, skip it
            if matches.get_flag(&disable_flag) {
                return false;
            }

            // If explicitly enabled, include it
            if matches.get_flag(&enable_flag) {
                return true;
            }

            // Otherwise, check the collector's default setting
            enabled_by_default(name)
        })
        .map(|&name| name.to_string())
        .collect()
}
