//! cacpulse - CAC 40 sentiment dashboard in the terminal.

use cacpulse::{App, Config, Error, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. The terminal belongs to the UI, so logs go to a file.
    let log_dir = cacpulse::config::log_dir().unwrap_or_else(|_| PathBuf::from("logs"));
    std::fs::create_dir_all(&log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cacpulse")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| Error::application(format!("Failed to open log file: {}", e)))?;
    let (writer, _guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cacpulse=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
