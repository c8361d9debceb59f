//! Tracing setup
//!
//! `RUST_LOG` wins when set; otherwise the passed (or default "info")
//! level applies across the board.

use std::path::Path;

use tracing_subscriber::EnvFilter;

pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize tracing, optionally also writing daily-rotated files under
/// `log_dir` (which must already exist).
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir
        && Path::new(dir).is_dir()
    {
        let appender = tracing_appender::rolling::daily(dir, "tracker-server");
        builder.with_writer(appender).with_ansi(false).init();
        return;
    }

    builder.init();
}
