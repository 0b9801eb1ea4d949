//! Diagnostic logging setup.

use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber; `RUST_LOG` overrides the quiet default.
pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // Prompts and spinners own the terminal, so keep log lines plain.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .try_init();
}
