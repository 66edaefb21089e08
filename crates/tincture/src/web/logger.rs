use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Routes `tracing` output to the browser console. Safe to call repeatedly.
pub fn init_logger(level: LevelFilter) {
    static LOGGER_INITIALIZED: std::sync::Once = std::sync::Once::new();

    LOGGER_INITIALIZED.call_once(move || {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false) // Only partially supported across JavaScript runtimes
            .without_time()
            .with_level(true)
            .with_target(true)
            .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

        let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

        let installed = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .with(level)
            .try_init();

        // The page may already own a global subscriber.
        if installed.is_ok() {
            std::panic::set_hook(Box::new(tracing_panic::panic_hook));
            tracing::debug!("theme logger initialized");
        }
    });
}
