//! One side of a ticker book: fixed-capacity slot storage in arrival order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use thiserror::Error;

use crate::types::Order;

/// Returned by [`BookSide::append`] when every slot is occupied.
///
/// The occupied-count is not advanced; the book stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("book side is at capacity ({capacity} resting orders)")]
pub struct SideFull {
    /// The side's fixed capacity
    pub capacity: usize,
}

/// Fixed-capacity storage for one side's resting orders.
///
/// Slots hold orders in arrival order - deliberately not price order. An
/// order, once published into its slot, is owned by that slot until the
/// engine is dropped; claimed (inactive) orders stay in place.
///
/// ## Example
///
/// ```
/// use tickmatch::orderbook::TickerBook;
/// use tickmatch::types::{Order, Side};
///
/// let book = TickerBook::new(4);
/// let side = book.side(Side::Sell);
///
/// let slot = side.append(Box::new(Order::new(Side::Sell, "AAPL", 10, 100))).unwrap();
/// assert_eq!(slot, 0);
/// assert_eq!(side.len(), 1);
/// assert_eq!(side.get(0).unwrap().quantity, 10);
/// ```
#[derive(Debug)]
pub struct BookSide {
    /// Pre-allocated slots; a cell is empty until its order is published.
    slots: Box<[OnceLock<Box<Order>>]>,

    /// Number of slots handed out so far. Advanced only by the atomic
    /// fetch-update in [`BookSide::append`].
    occupied: AtomicUsize,
}

impl BookSide {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| OnceLock::new()).collect(),
            occupied: AtomicUsize::new(0),
        }
    }

    /// The side's fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    ///
    /// A slot below this count may still be mid-publication by a concurrent
    /// appender; [`BookSide::get`] reports it as absent until published.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied.load(Ordering::Acquire)
    }

    /// Whether no orders have been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an order, returning the slot it now occupies.
    ///
    /// Safe under concurrent callers: the insertion position and the count
    /// increment are one atomic step, never a plain read-then-write, so two
    /// concurrent appends can neither share a slot nor overwrite each
    /// other. When the side is full the count is left unchanged and
    /// [`SideFull`] is returned.
    pub fn append(&self, order: Box<Order>) -> Result<usize, SideFull> {
        let capacity = self.slots.len();
        let slot = self
            .occupied
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |occupied| {
                (occupied < capacity).then_some(occupied + 1)
            })
            .map_err(|_| SideFull { capacity })?;

        // The fetch-update handed this slot to us exclusively, so the cell
        // is still empty and the set cannot fail.
        let _ = self.slots[slot].set(order);
        Ok(slot)
    }

    /// The order at `slot`, or `None` if the slot is out of range or its
    /// order has not been published yet.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&Order> {
        self.slots.get(slot)?.get().map(|order| &**order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
