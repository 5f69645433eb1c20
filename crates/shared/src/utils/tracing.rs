use std::sync::Once;

use time::format_description::well_known::Iso8601;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{format::Pretty, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Logs to the worker's devtools console. Panics if a global subscriber is
/// already installed, use [`configure_tracing_once`] from event handlers.
pub fn configure_tracing(max_level: LevelFilter) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .with_target(false)
        .with_timer(UtcTime::new(Iso8601::DEFAULT))
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(max_level)
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

/// Configures tracing inside a Once block so multiple calls don't panic. Only
/// the level passed on the first call takes effect.
pub fn configure_tracing_once(max_level: LevelFilter) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| configure_tracing(max_level));
}
