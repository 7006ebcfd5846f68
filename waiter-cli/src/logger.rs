//! Logging Infrastructure
//!
//! Logs go to stderr so command output on stdout stays clean.

use std::path::Path;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "waiter=info,waiter_client=info";

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level`. With `log_dir` pointing at an existing
/// directory, logs are written to a daily rolling file there instead.
pub fn init_logger(log_level: Option<&str>, log_dir: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.filter(|d| d.is_dir()) {
        let file_appender = tracing_appender::rolling::daily(dir, "waiter");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.with_writer(std::io::stderr).init();
}
