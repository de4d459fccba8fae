//! Logging shims. Forward to `tracing` when the `tracing` feature is on and
//! expand to nothing otherwise, so `no_std` builds carry no logging cost.

#[cfg(feature = "tracing")]
macro_rules! ctx_trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ctx_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ctx_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ctx_debug {
    ($($arg:tt)*) => {};
}
