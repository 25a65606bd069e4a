use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_FILE_NAME: &str = "labyrinth.log";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: LevelFilter,
}

impl LogConfig {
    /// Logs into `dir` at the level picked by [`level_from_env`].
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            level: level_from_env(),
        }
    }
}

/// Install a global subscriber writing to `LOG_FILE_NAME` inside the configured directory.
///
/// Writes go through a background thread; the returned guard flushes it on drop, so keep it
/// alive until the program ends. Returns `None` if a global subscriber is already set.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(&config.dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.level)
        .with_thread_names(true)
        .try_init()
        .ok()?;

    tracing::info!("Logging initialized at level {}", config.level);
    Some(guard)
}

/// Log level from the `DEBUG` environment variable: `1` turns on debug output.
pub fn level_from_env() -> LevelFilter {
    match std::env::var("DEBUG") {
        Ok(val) if val == "1" => LevelFilter::DEBUG,
        _ => LevelFilter::INFO,
    }
}
