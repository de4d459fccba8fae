//! bounded-context: a fixed-capacity, allocation-free key-value context
//! for carrying ambient data (request ids, user, role) through a call
//! chain.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: the role of a request-scoped context with a hard upper bound on
//!   memory and no heap use, for targets where maps and growable vectors
//!   are unavailable or unwanted.
//! - Storage: `BoundedContext<K, V, N>` keeps up to `N` pairs inline in an
//!   array plus a count. Only the first `len` slots are ever read.
//!
//! Write paths
//! - `derive(parent, k, v)` / `parent.with_value(k, v)`: copy the parent's
//!   pairs into a new context and append. The parent is untouched and stays
//!   usable; siblings derived from one parent share nothing.
//! - `set(&mut self, k, v)`: append in place. Everyone holding this instance
//!   observes the pair.
//! - Both are append-only. There is no removal and no update of an existing
//!   slot; rewriting a key consumes a new slot.
//!
//! Lookup
//! - `get(k)` scans the live slots newest-first and returns the first match,
//!   so the latest write for a key shadows older ones. O(len), bounded by `N`.
//! - `lookup(None, k)` is `None`: a missing context reads as empty.
//!
//! Failure policy
//! - The only failure is `CapacityExceeded`, returned when a write hits a
//!   full context. The target is left unchanged and nothing is partially
//!   written. The crate never panics on exhaustion; callers that want
//!   abort-on-full semantics call `.expect()` themselves.
//!
//! Constraints
//! - `N` is a const generic (default 16) fixed at compile time.
//! - No interior mutability and no locking. `set` needs `&mut self`;
//!   sharing a mutable context across threads takes an external lock.
//!   `BoundedContext` is `Send`/`Sync` whenever `K` and `V` are.
//! - `no_std` when the default `std` feature is off.
//!
//! Notes and non-goals
//! - No iteration over pairs, no merge of two contexts, no persistence.
//! - With the `tracing` feature, writes emit `trace` events and rejected
//!   writes emit `debug` events.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
mod trace;

mod bounded_context;
mod bounded_context_proptest;
pub mod error;

// Public surface
pub use bounded_context::{BoundedContext, DEFAULT_CAPACITY};
pub use error::{CapacityExceeded, Result};

/// Context over borrowed string keys and values with the default capacity.
pub type Context<'a> = BoundedContext<&'a str, &'a str, DEFAULT_CAPACITY>;

/// Eight-slot variant for the tightest memory budgets.
pub type SmallContext<'a> = BoundedContext<&'a str, &'a str, 8>;
