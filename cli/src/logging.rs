use freshcheck_core::api::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Stdout carries the decision JSON, so logs go to stderr or, when
/// `logging.directory` is set, to a daily file there. `RUST_LOG` overrides the
/// configured level.
///
/// The returned guard must outlive every log call.
pub fn init(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    let dir = cfg.directory.as_deref().filter(|d| !d.trim().is_empty());
    if let Some(dir) = dir {
        match RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("freshcheck")
            .filename_suffix("log")
            .build(dir)
        {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .try_init();
                return Some(guard);
            }
            Err(e) => eprintln!("freshcheck: cannot log to {dir}: {e}; using stderr"),
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    None
}
