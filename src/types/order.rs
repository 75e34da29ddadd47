//! Order types for the matching core.
//!
//! ## Mutability Model
//!
//! Every field of an [`Order`] except its `active` flag is write-once: set at
//! construction and immutable afterwards, so it is safe to read from any
//! thread once the order is visible in a book slot. The `active` flag is the
//! only shared mutable state, and it is only ever changed by a successful
//! compare-and-swap claim.

use crate::sync::AtomicFlag;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order occupying one book slot.
///
/// ## Lifecycle
///
/// Created by `submit_order`, appended to its book slot exactly once, and
/// never moved, removed, or reused. The `active` flag starts true and
/// transitions to false at most once, via a successful [`Order::claim`].
///
/// ## Preconditions
///
/// `quantity` and `price` must be positive; the core does not validate them.
///
/// ## Example
///
/// ```
/// use tickmatch::types::{Order, Side};
/// use tickmatch::types::price::SCALE;
///
/// // A sell of 50 AAPL shares at 100.00
/// let order = Order::new(Side::Sell, "AAPL", 50, 100 * SCALE);
/// assert!(order.is_active());
/// assert!(order.claim());
/// assert!(!order.is_active());
/// ```
#[derive(Debug)]
pub struct Order {
    /// Buy or Sell
    pub side: Side,

    /// Ticker symbol this order trades
    pub ticker: String,

    /// Share count (whole shares, positive)
    pub quantity: u64,

    /// Limit price in fixed-point (scaled by 10^8, positive)
    pub price: u64,

    /// True while the order is matchable. Cleared exactly once by the
    /// matcher that claims it.
    active: AtomicFlag,
}

impl Order {
    /// Create a new active limit order.
    pub fn new(side: Side, ticker: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            side,
            ticker: ticker.into(),
            quantity,
            price,
            active: AtomicFlag::new(true),
        }
    }

    /// Whether the order is still matchable.
    ///
    /// A true result is advisory under concurrency: another matcher may
    /// claim the order between this read and a subsequent [`Order::claim`].
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load()
    }

    /// Attempt to claim this order for a trade.
    ///
    /// Atomically transitions active -> inactive. Returns `true` iff this
    /// caller won the claim; among any number of concurrent claimants,
    /// exactly one wins.
    #[inline]
    pub fn claim(&self) -> bool {
        self.active.compare_and_swap(true, false)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
