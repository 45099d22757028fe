//! Logging bootstrap plus a conditional macro gated on a module-level
//! `ENABLE_LOGS` flag, so chatty pipeline internals can be silenced without
//! touching call sites.
//!
//! Usage:
//! ```text
//! // In the module that wants gated logging:
//! const ENABLE_LOGS: bool = false;
//!
//! use crate::log_info;
//!
//! log_info!("only logged while ENABLE_LOGS is true");
//! ```

/// Initialize env_logger once at process start (reads RUST_LOG, defaults to
/// Info).
pub fn init() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// Info-level logging gated on the calling module's `ENABLE_LOGS` const.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}
