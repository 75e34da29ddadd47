//! Ticker registry: symbol -> stable book index.
//!
//! ## Algorithm
//!
//! `resolve` is optimistic-then-locked so the common case (symbol already
//! registered) never takes the lock:
//!
//! 1. Scan the published symbols lock-free; hit -> return the index
//! 2. Miss and capacity remains -> take the registration mutex
//! 3. Re-scan under the lock (a racing caller may have registered it first)
//! 4. Still missing -> publish the symbol in the next slot, advance the
//!    count, return the new index
//!
//! Indices are assigned monotonically in first-seen order and are never
//! reassigned or freed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

/// Returned by [`TickerRegistry::resolve`] when the registry is full and
/// the symbol is not already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ticker registry is at capacity ({capacity} symbols)")]
pub struct RegistryFull {
    /// The registry's fixed capacity
    pub capacity: usize,
}

/// Maps a bounded set of ticker symbols to dense, stable slot indices.
///
/// ## Example
///
/// ```
/// use tickmatch::engine::TickerRegistry;
///
/// let registry = TickerRegistry::new(2);
/// assert_eq!(registry.resolve("AAPL").unwrap(), 0);
/// assert_eq!(registry.resolve("MSFT").unwrap(), 1);
/// assert_eq!(registry.resolve("AAPL").unwrap(), 0); // idempotent
/// assert!(registry.resolve("TSLA").is_err());       // full
/// ```
#[derive(Debug)]
pub struct TickerRegistry {
    /// Pre-allocated symbol slots; a slot is published before the count
    /// that covers it is advanced, so every slot below `registered` is
    /// always readable.
    symbols: Box<[OnceLock<String>]>,

    /// Number of registered symbols
    registered: AtomicUsize,

    /// Serializes registration of unseen symbols only; lookups never take
    /// this lock.
    register_lock: Mutex<()>,
}

impl TickerRegistry {
    /// Create a registry with room for `capacity` distinct symbols.
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: (0..capacity).map(|_| OnceLock::new()).collect(),
            registered: AtomicUsize::new(0),
            register_lock: Mutex::new(()),
        }
    }

    /// The registry's fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.symbols.len()
    }

    /// Number of symbols registered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.registered.load(Ordering::Acquire)
    }

    /// Whether no symbols have been registered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The symbol at `index`, if one has been registered there.
    pub fn symbol(&self, index: usize) -> Option<&str> {
        if index >= self.len() {
            return None;
        }
        self.symbols[index].get().map(String::as_str)
    }

    /// Find or create the slot index for `symbol`.
    pub fn resolve(&self, symbol: &str) -> Result<usize, RegistryFull> {
        let capacity = self.symbols.len();

        // Optimistic pass over the current snapshot: the common case is an
        // already-registered symbol and takes no lock.
        let published = self.registered.load(Ordering::Acquire);
        if let Some(index) = self.find(symbol, published) {
            return Ok(index);
        }
        if published >= capacity {
            return Err(RegistryFull { capacity });
        }

        let _guard = self.register_lock.lock();

        // Re-scan: a racing caller may have registered this symbol between
        // the optimistic pass and lock acquisition.
        let published = self.registered.load(Ordering::Acquire);
        if let Some(index) = self.find(symbol, published) {
            return Ok(index);
        }
        if published >= capacity {
            return Err(RegistryFull { capacity });
        }

        // Publish the symbol before advancing the count so lock-free
        // scanners never observe an empty slot below `registered`.
        let _ = self.symbols[published].set(symbol.to_owned());
        self.registered.store(published + 1, Ordering::Release);
        debug!(symbol, index = published, "registered ticker");
        Ok(published)
    }

    fn find(&self, symbol: &str, published: usize) -> Option<usize> {
        self.symbols[..published]
            .iter()
            .position(|slot| slot.get().is_some_and(|s| s == symbol))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
