//! Claim-flag synchronization primitive.
//!
//! ## Why a dedicated type?
//!
//! The matching scan needs exactly one guarantee: when any number of
//! concurrent matchers race to claim the same resting order, exactly one
//! wins. A compare-and-swap boolean is the cheapest primitive that gives
//! that guarantee; a per-order mutex would serialize matchers across
//! unrelated orders.
//!
//! `AtomicFlag` exposes only the load/store/compare-and-swap capability, so
//! callers never depend on the backing representation - a mutex-guarded bool
//! could satisfy the same contract.

use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean cell safe under concurrent access from any number of callers.
///
/// All three operations are total: there are no error conditions.
///
/// ## Example
///
/// ```
/// use tickmatch::sync::AtomicFlag;
///
/// let flag = AtomicFlag::new(true);
/// assert!(flag.compare_and_swap(true, false));  // first claim wins
/// assert!(!flag.compare_and_swap(true, false)); // second claim loses
/// assert!(!flag.load());
/// ```
#[derive(Debug)]
pub struct AtomicFlag(AtomicBool);

impl AtomicFlag {
    /// Create a flag with the given initial value.
    pub fn new(value: bool) -> Self {
        Self(AtomicBool::new(value))
    }

    /// Read the current value.
    #[inline]
    pub fn load(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Unconditionally overwrite the value.
    #[inline]
    pub fn store(&self, value: bool) {
        self.0.store(value, Ordering::Release);
    }

    /// Atomically set the value to `desired` iff it currently equals
    /// `expected`.
    ///
    /// Returns `true` on success. On failure the value is left unchanged and
    /// `false` is returned.
    #[inline]
    pub fn compare_and_swap(&self, expected: bool, desired: bool) -> bool {
        self.0
            .compare_exchange(expected, desired, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for AtomicFlag {
    fn default() -> Self {
        Self::new(false)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_load_store() {
        let flag = AtomicFlag::new(false);
        assert!(!flag.load());

        flag.store(true);
        assert!(flag.load());

        flag.store(false);
        assert!(!flag.load());
    }

    #[test]
    fn test_compare_and_swap_success() {
        let flag = AtomicFlag::new(true);
        assert!(flag.compare_and_swap(true, false));
        assert!(!flag.load());
    }

    #[test]
    fn test_compare_and_swap_failure_leaves_value() {
        let flag = AtomicFlag::new(false);
        assert!(!flag.compare_and_swap(true, false));
        assert!(!flag.load());

        // Swapping to the same value still reports success
        assert!(flag.compare_and_swap(false, false));
        assert!(!flag.load());
    }

    #[test]
    fn test_default_is_false() {
        assert!(!AtomicFlag::default().load());
    }

    #[test]
    fn test_exactly_one_concurrent_winner() {
        let flag = Arc::new(AtomicFlag::new(true));
        let num_threads = 16;

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let flag = flag.clone();
                thread::spawn(move || flag.compare_and_swap(true, false))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        assert_eq!(winners, 1, "exactly one CAS must win");
        assert!(!flag.load());
    }
}
