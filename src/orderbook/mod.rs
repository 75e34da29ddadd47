//! Order book module: fixed-capacity, arrival-order storage per ticker.
//!
//! ## Architecture
//!
//! Unlike a sorted central limit order book, this book intentionally keeps
//! each side as a flat slot array in arrival order:
//!
//! - [`BookSide`]: one side's slots plus an atomic occupied-count
//! - [`TickerBook`]: the buy side and the sell side for one ticker
//!
//! Slots are pre-allocated, indexed by small integers, and never relocated,
//! so a concurrent reader's slot index stays valid for the life of the
//! engine.
//!
//! ## Concurrency
//!
//! Appending claims a position with a single atomic fetch-update of the
//! occupied-count; two concurrent appends can never share a slot or
//! overwrite each other. Readers scanning up to the count may observe a slot
//! whose order has not been published yet and treat it as absent.

pub mod book;
pub mod side;

pub use book::TickerBook;
pub use side::{BookSide, SideFull};
