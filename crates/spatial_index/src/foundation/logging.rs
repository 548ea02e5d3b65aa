//! Logging utilities
//!
//! Thin facade over `log`/`env_logger` so hosts and tests can switch on
//! trace output for the tree operations without wiring their own logger.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment.
pub fn init() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();
}

/// Initialize logging for tests; repeat initialization is ignored.
pub fn init_for_tests() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
