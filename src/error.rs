//! Error returned when a write would exceed a context's fixed capacity.

use thiserror::Error;

/// A write (derive or set) was attempted on a context that already holds
/// `capacity` pairs.
///
/// The target context is left exactly as it was before the call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("context capacity of {capacity} pairs exceeded")]
pub struct CapacityExceeded {
    /// The fixed pair limit of the context that rejected the write.
    pub capacity: usize,
}

impl CapacityExceeded {
    pub(crate) const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

/// Result alias for fallible context writes.
pub type Result<T, E = CapacityExceeded> = core::result::Result<T, E>;
