//! BoundedContext: fixed-capacity key-value storage with reverse-scan lookup.

use crate::error::{CapacityExceeded, Result};
use core::borrow::Borrow;
use core::fmt;

/// Pair limit used when no capacity is named.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Clone, PartialEq, Eq, Hash)]
struct Pair<K, V> {
    key: K,
    value: V,
}

/// An ordered, append-only sequence of at most `N` key-value pairs stored
/// inline, with last-write-wins lookup.
///
/// Two write paths share the same storage discipline:
/// - [`derive`](Self::derive) / [`with_value`](Self::with_value) copy the
///   parent and append to the copy. The parent is never touched, so a chain
///   of derived contexts behaves like an immutable request context.
/// - [`set`](Self::set) appends in place. Every holder of this instance sees
///   the new pair; no copy is made.
///
/// Writes never deduplicate. Writing a key again shadows the older pair but
/// still consumes a slot, so `N` bounds writes, not distinct keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoundedContext<K, V, const N: usize = DEFAULT_CAPACITY> {
    slots: [Option<Pair<K, V>>; N],
    // Slots at `len..` are never read.
    len: usize,
}

impl<K, V, const N: usize> BoundedContext<K, V, N> {
    /// Create an empty context.
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; N],
            len: 0,
        }
    }

    /// Number of pairs written so far, shadowed ones included.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed pair limit `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Writes left before the context is full.
    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    /// True once `N` pairs have been written; every further write fails.
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Append in place.
    ///
    /// Fails with [`CapacityExceeded`] when the context is full, leaving it
    /// unchanged.
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        match self.push(key, value) {
            Ok(()) => {
                ctx_trace!(len = self.len, capacity = N, "set context value");
                Ok(())
            }
            Err(e) => {
                ctx_debug!(capacity = N, "set rejected: context is full");
                Err(e)
            }
        }
    }

    /// Value of the most recent pair whose key equals `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.live()
            .rev()
            .find(|p| p.key.borrow() == key)
            .map(|p| &p.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.get(key).is_some()
    }

    /// Lookup that accepts a missing context and treats it as empty.
    ///
    /// ```
    /// use bounded_context::Context;
    ///
    /// let root: Option<&Context<'_>> = None;
    /// assert_eq!(Context::lookup(root, "x"), None);
    /// ```
    pub fn lookup<'a, Q>(ctx: Option<&'a Self>, key: &Q) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        ctx?.get(key)
    }

    fn push(&mut self, key: K, value: V) -> Result<()> {
        let Some(slot) = self.slots.get_mut(self.len) else {
            return Err(CapacityExceeded::new(N));
        };
        *slot = Some(Pair { key, value });
        self.len += 1;
        Ok(())
    }

    fn live(&self) -> impl DoubleEndedIterator<Item = &Pair<K, V>> + '_ {
        self.slots[..self.len].iter().flatten()
    }
}

impl<K: Clone, V: Clone, const N: usize> BoundedContext<K, V, N> {
    /// Produce a new context holding the parent's pairs plus `key => value`.
    ///
    /// A `None` parent starts from an empty context. The parent is never
    /// modified; on [`CapacityExceeded`] no context is produced.
    ///
    /// ```
    /// use bounded_context::Context;
    ///
    /// let root = Context::new();
    /// let child = Context::derive(Some(&root), "user", "alice").unwrap();
    /// assert_eq!(child.get("user"), Some(&"alice"));
    /// assert!(root.is_empty());
    /// ```
    pub fn derive(parent: Option<&Self>, key: K, value: V) -> Result<Self> {
        let mut ctx = match parent {
            // Fail before paying for the copy.
            Some(p) if p.is_full() => {
                ctx_debug!(capacity = N, "derive rejected: parent is full");
                return Err(CapacityExceeded::new(N));
            }
            Some(p) => p.clone(),
            None => Self::new(),
        };
        if let Err(e) = ctx.push(key, value) {
            ctx_debug!(capacity = N, "derive rejected: context is full");
            return Err(e);
        }
        ctx_trace!(len = ctx.len, capacity = N, "derived context");
        Ok(ctx)
    }

    /// Method form of [`derive`](Self::derive) with `self` as the parent.
    pub fn with_value(&self, key: K, value: V) -> Result<Self> {
        Self::derive(Some(self), key, value)
    }
}

impl<K, V, const N: usize> Default for BoundedContext<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

struct LivePairs<'a, K, V, const N: usize>(&'a BoundedContext<K, V, N>);

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for LivePairs<'_, K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.live().map(|p| (&p.key, &p.value)))
            .finish()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for BoundedContext<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedContext")
            .field("pairs", &LivePairs(self))
            .field("capacity", &N)
            .finish()
    }
}
