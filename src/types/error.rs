//! Rejection taxonomy for order submission.
//!
//! Both conditions are expected, recoverable outcomes: the order is dropped
//! and reported, and the engine remains fully usable. Nothing in the core is
//! a process-fatal fault.

use thiserror::Error;

use crate::types::Side;

/// Why `submit_order` dropped an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The ticker registry is full and the symbol was not already
    /// registered. Submissions for existing tickers keep working.
    #[error("ticker limit reached, dropping order for {symbol}")]
    TickerCapacityExceeded {
        /// The symbol that could not be registered
        symbol: String,
    },

    /// The resting-order storage for this side of the ticker's book is
    /// full. The other side and other tickers keep working.
    #[error("out of {side:?} slots for {symbol}")]
    BookCapacityExceeded {
        /// The symbol whose book is full
        symbol: String,
        /// The side whose storage is exhausted
        side: Side,
    },
}
