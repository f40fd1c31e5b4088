//! Logging setup

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`, console only
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger, writing to a daily rolling file when `log_dir`
/// exists. `RUST_LOG` overrides `log_level`; `json` switches to JSON lines.
/// Calling it twice is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = match log_dir {
        Some(dir) if Path::new(dir).is_dir() => {
            Some(tracing_appender::rolling::daily(dir, "seller-console"))
        }
        Some(dir) => {
            eprintln!("log directory {dir} not found, logging to stderr");
            None
        }
        None => None,
    };

    let _ = match (json.unwrap_or(false), file_appender) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().with_writer(std::io::stderr).try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.with_writer(std::io::stderr).try_init(),
    };
}
