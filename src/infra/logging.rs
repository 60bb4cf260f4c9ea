//! Process-wide tracing subscriber.

use crate::infra::config::LogFormat;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "morpheme_blocks=info,api_server=info,tower_http=info";

static INIT_ONCE: Once = Once::new();

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init(format: LogFormat) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        // try_init: a subscriber installed by an embedding process wins.
        let _ = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    });
}
