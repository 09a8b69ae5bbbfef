#[cfg(feature = "trace")]
use std::path::Path;

/// Keeps the background log writer alive; dropping it flushes pending lines.
#[cfg(feature = "trace")]
pub type TraceGuard = tracing_appender::non_blocking::WorkerGuard;

#[cfg(not(feature = "trace"))]
pub struct TraceGuard;

/// Send span/event records as JSON lines to `<log_dir>/dys-trace.jsonl`.
///
/// Returns `None` if a global subscriber is already installed.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, "dys-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("dys_core=debug,dys_session=debug")
            }),
        )
        .try_init()
        .ok()?;
    Some(guard)
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> Option<TraceGuard> {
    None
}
