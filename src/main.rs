//! taskboard - A terminal client for a task-management REST API.
//!
//! This is the main binary that launches the TUI application.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use taskboard_api::TaskClient;
use taskboard_config::Config;
use taskboard_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging()?;

    let config = Config::load().context("failed to load configuration")?;
    let client =
        TaskClient::new(config.base_url.clone()).context("failed to create API client")?;
    tracing::info!(base_url = %client.base_url(), "starting taskboard");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal, &client).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Initializes file-based logging.
///
/// Stdout belongs to the TUI, so log lines go to `taskboard.log` in the
/// user's local data directory, falling back to the working directory.
/// The level is controlled through the `TASKBOARD_LOG` environment
/// variable and defaults to `info`.
fn init_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join("taskboard"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    std::fs::create_dir_all(&log_dir).context("failed to create log directory")?;

    let appender = tracing_appender::rolling::never(&log_dir, "taskboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("TASKBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
