//! File logging through tracing
//!
//! The terminal belongs to the TUI, so nothing is written to stdout or
//! stderr. Records go to a daily-rotated file named
//! `linklens.<YYYY-MM-DD>.log` (UTC date, as tracing-appender names it).

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "LINKLENS_LOG";

const DEFAULT_FILTER: &str = "linklens=info,warn";
const FILE_PREFIX: &str = "linklens";
const FILE_SUFFIX: &str = "log";

/// Install the global subscriber.
///
/// ```bash
/// LINKLENS_LOG=debug linklens
/// LINKLENS_LOG=linklens_api=trace linklens
/// ```
pub fn init() -> Result<()> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(FILE_PREFIX)
        .filename_suffix(FILE_SUFFIX)
        .build(&dir)
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(
        "linklens {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );
    Ok(())
}

/// `<data dir>/linklens/logs`, or `./linklens/logs` without a data dir
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linklens")
        .join("logs")
}

/// File the appender is writing today
pub fn get_current_log_file() -> PathBuf {
    log_file_for(&log_directory(), Utc::now().date_naive())
}

fn log_file_for(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!(
        "{FILE_PREFIX}.{}.{FILE_SUFFIX}",
        date.format("%Y-%m-%d")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_carries_rotation_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let path = log_file_for(Path::new("/tmp/logs"), date);
        assert_eq!(path, PathBuf::from("/tmp/logs/linklens.2026-03-07.log"));
    }

    #[test]
    fn test_current_log_file_lives_under_linklens_logs() {
        let path = get_current_log_file();
        assert!(path.parent().unwrap().ends_with("linklens/logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("linklens.") && name.ends_with(".log"));
    }
}
