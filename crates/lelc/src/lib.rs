//! `lelc`: prints the labeled embedded-language injections of host sources.
//!
//! The binary in `main.rs` is a thin wrapper; argument parsing and report
//! rendering live in [`commands`] so they can be tested directly.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG` (e.g. `RUST_LOG=lel_lexer_core=trace`). Does nothing
/// when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
