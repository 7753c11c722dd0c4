use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. Each `-v` overrides the
/// configured level one step further.
pub fn default_directive(verbosity: u8, config_level: &str) -> String {
    match verbosity {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the process-wide subscriber. Call once, before the first operation.
pub fn init_logging(verbosity: u8, config_level: &str) {
    let directive = default_directive(verbosity, config_level);

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
