//! File-based logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation in `config.log_dir`
/// - Non-blocking writes so logging never stalls the workflow
/// - Optional stderr mirror for interactive sessions
/// - Span close events (with timings) when the filter enables debug output
///
/// Returns `None` when the log directory cannot be created or a global
/// subscriber is already installed (e.g., a second call in tests).
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("wallet_setup=info,warn"));

    let span_events = if config.is_debug_enabled() {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_ansi(false); // No ANSI codes in log files

    let console_layer = config
        .console
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false).boxed());

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        console = config.console,
        debug = config.is_debug_enabled(),
        "Logging initialized"
    );

    Some(guard)
}
