//! Tracing hooks for type resolution and decimal limiting.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level event for a cast-target resolution outcome.
///
/// ```ignore
/// coltypes_trace_cast!(value_type = %typ, "no column type for value type");
/// ```
#[macro_export]
macro_rules! coltypes_trace_cast {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "coltypes.cast", $($arg)+);
    };
}

/// Emit a debug-level event when a decimal is rounded or rejected.
///
/// ```ignore
/// coltypes_trace_limit!(precision, scale, "decimal out of range");
/// ```
#[macro_export]
macro_rules! coltypes_trace_limit {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "coltypes.decimal", $($arg)+);
    };
}
