// ! attest-runtime: the ledger that hosts engines and administrations
// !
// ! Provides the clock, deterministic instance addresses and call routing
// ! between administration layers and the engines bound to them.

pub mod clock;
pub mod error;
pub mod ledger;
pub mod registry;

pub use clock::LedgerClock;
pub use error::LedgerError;
pub use ledger::Ledger;
pub use registry::EngineRegistry;

use attest_config::LoggingConfig;

/// Initialize runtime components (logging, etc.)
pub fn init_runtime() {
    // Ignore error if logger is already initialized
    let _ = env_logger::try_init();
}

/// Initialize logging from config. `RUST_LOG` still wins when it is set.
pub fn init_logging(config: &LoggingConfig) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        }
    }
    let _ = builder.try_init();
}
