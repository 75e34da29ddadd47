//! Trade type representing an executed match against a resting order.

use crate::types::Side;

/// A trade emitted when an incoming order claims a resting order.
///
/// ## Terminology
///
/// - **Maker**: The resting order that was already in the book
/// - **Taker**: The incoming order whose submission triggered the match
///
/// ## Price Discovery
///
/// The trade always executes at the maker's price (the resting order's
/// price), never the incoming limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    /// Registry index of the ticker this trade occurred on
    pub ticker_index: usize,

    /// Side of the incoming (taker) order
    pub taker_side: Side,

    /// Slot of the claimed resting order on the opposite side. Together
    /// with `ticker_index` and `taker_side` this identifies the maker.
    pub maker_slot: usize,

    /// Execution price in fixed-point (the resting order's price)
    pub price: u64,

    /// Executed share count: min(resting quantity, taker's remaining)
    pub quantity: u64,
}

impl Trade {
    /// Notional value of this trade (price * quantity).
    ///
    /// The result carries the price's 10^8 scaling; divide by
    /// [`price::SCALE`](crate::types::price::SCALE) for the actual notional.
    pub fn notional_raw(&self) -> u128 {
        (self.price as u128) * (self.quantity as u128)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
