//! JSON event log for host applications, enabled by the `trace` feature.
//!
//! Provider spans and history events are written one JSON object per line to
//! `<log_dir>/kana-trace.jsonl`, with event fields (`candidate`, `snapshots`,
//! `engine`, ...) flattened to the top level so traces can be filtered with
//! `jq` and replayed with `kanatool`.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "trace")]
use tracing_subscriber::fmt::MakeWriter;
#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
pub const TRACE_FILE_NAME: &str = "kana-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kana_engine=debug,kana_session=debug,kana_core=debug";

#[cfg(feature = "trace")]
fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Subscriber writing flattened JSON records to `writer`.
#[cfg(feature = "trace")]
pub(crate) fn json_subscriber<W>(
    writer: W,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .with_env_filter(filter)
        .finish()
}

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // flushed for the life of the process

        let subscriber = json_subscriber(non_blocking, filter());
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                log_dir = %log_dir.display(),
                "kana trace started"
            );
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
