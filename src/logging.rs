//! Tracing setup. The TUI owns stdout, so everything goes to a daily log file.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "picto-lingua";
const DEFAULT_FILTER: &str = "picto_lingua=debug,reqwest=info,warn";

/// Route tracing output to `.logs/picto-lingua.YYYY-MM-DD.log`.
///
/// `RUST_LOG` replaces [`DEFAULT_FILTER`] when set.
pub fn init_logging() -> anyhow::Result<()> {
    if !Path::new(LOG_DIR).exists() {
        std::fs::create_dir_all(LOG_DIR)?;
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    // Flushes on drop, so it lives as long as the process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry().with(filter).with(file_layer).try_init()?;

    tracing::info!(dir = LOG_DIR, "Logging initialized");
    Ok(())
}

/// Log the outcome of a backend call: `info` on success, `error` with the cause otherwise
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, "Backend call succeeded"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Backend call failed"),
        }
    };
}

/// Log the start of a backend call with its parameters as fields
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "Backend call started");
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_api_macros_accept_both_outcomes() {
        let theme_id = "animals";
        log_api_request!("fetch_images", theme_id, count = 10);
        let ok: Result<u32, String> = Ok(1);
        let err: Result<u32, String> = Err("connection refused".to_string());
        log_api_result!("fetch_images", ok);
        log_api_result!("fetch_images", err);
        assert!(ok.is_ok() && err.is_err());
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(super::DEFAULT_FILTER).is_ok());
    }
}
