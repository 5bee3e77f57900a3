//! Console logging shorthands.
//!
//! These expand to `tracing` events; the CLI's formatter turns the
//! levels into the `[+]`/`[*]`/`[-]` symbols shown on the terminal.

/// Reports a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Reports a fatal or user-facing failure.
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
