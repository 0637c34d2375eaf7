//! Tracing subscriber setup for the CLI.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Flushes buffered file logs on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// Logs go to stderr so that command output on stdout stays parseable.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true);

    let file_writer = env::var("LOG_DIR").ok().and_then(init_file_writer);

    if let Some(file_writer) = file_writer {
        let stderr = std::io::stderr.with_max_level(tracing::Level::WARN);
        builder.with_writer(stderr.and(file_writer)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    tracing::debug!("logger initialized");
}

fn init_file_writer(dir: String) -> Option<NonBlocking> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("riot-schema.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = match file_builder.build(&dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("cannot log to {dir}: {e}");
            return None;
        }
    };

    let (file_writer, guard) = non_blocking(file_appender);

    // Only reachable once, `init` runs once per process.
    let _ = LOG_GUARD.set(guard);

    Some(file_writer)
}
