//! Utility functions.

use anyhow::anyhow;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: OnceCell<()> = OnceCell::new();

/// Installs a test-friendly tracing subscriber, once per process.
///
/// Honours `RUST_LOG`; defaults to `errxpect=debug`. Output goes through the
/// test writer so it is captured per test.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        if let Err(err) = try_init_tracing() {
            eprintln!("tracing already initialised: {}", err);
        }
    });
}

fn try_init_tracing() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("errxpect=debug"));

    fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))
}
