//! Quiet, capturable logging for test binaries.
//!
//! The backend lib installs this through a `ctor` hook, and each integration
//! test binary does the same from `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Filter source, first match wins: `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the test subscriber once per process. Later calls are no-ops,
/// and a subscriber installed by someone else is left in place.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
