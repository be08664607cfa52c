use anyhow::Result;
use mysql_probe::cli::{actions::run, commands, dispatch};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the event stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = commands::new().get_matches();
    let action = dispatch::handler(&matches)?;

    run::handle(action).await
}
