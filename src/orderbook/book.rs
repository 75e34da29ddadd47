//! Per-ticker order book: one fixed-capacity side for buys, one for sells.

use crate::orderbook::BookSide;
use crate::types::Side;

/// The resting orders for a single ticker.
///
/// Owned by the engine at the ticker's registry index for the engine's whole
/// lifetime. Both sides are pre-allocated at construction.
///
/// ## Retirement semantics
///
/// A resting order claimed by a match is retired with its entire original
/// quantity, even when the trade consumed less; the remainder is not
/// re-queued. The claimed order stays in its slot, inactive, and is skipped
/// by later scans.
#[derive(Debug)]
pub struct TickerBook {
    buys: BookSide,
    sells: BookSide,
}

impl TickerBook {
    /// Create a book with `capacity_per_side` slots on each side.
    pub fn new(capacity_per_side: usize) -> Self {
        Self {
            buys: BookSide::new(capacity_per_side),
            sells: BookSide::new(capacity_per_side),
        }
    }

    /// The storage for the given side.
    #[inline]
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    /// The resting buy orders.
    #[inline]
    pub fn buys(&self) -> &BookSide {
        &self.buys
    }

    /// The resting sell orders.
    #[inline]
    pub fn sells(&self) -> &BookSide {
        &self.sells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order;

    #[test]
    fn test_sides_are_independent() {
        let book = TickerBook::new(4);

        book.side(Side::Buy)
            .append(Box::new(Order::new(Side::Buy, "AAPL", 1, 100)))
            .unwrap();

        assert_eq!(book.buys().len(), 1);
        assert_eq!(book.sells().len(), 0);
    }

    #[test]
    fn test_side_lookup_matches_accessors() {
        let book = TickerBook::new(2);
        assert!(std::ptr::eq(book.side(Side::Buy), book.buys()));
        assert!(std::ptr::eq(book.side(Side::Sell), book.sells()));
    }
}
