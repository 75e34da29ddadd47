//! # tickmatch
//!
//! Concurrent in-memory matching core for exchange-style limit orders.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Sync**: `AtomicFlag`, the compare-and-swap cell used to claim resting orders
//! - **Types**: Core data structures (Order, Side, Trade, RejectReason)
//! - **OrderBook**: Fixed-capacity, arrival-order slot storage per ticker
//! - **Engine**: Ticker registry plus the matching scan
//!
//! ## Design Principles
//!
//! 1. **Race-free under shared submission**: Any number of threads may call
//!    `submit_order` concurrently; a resting order is claimed by at most one
//!    matcher, ever.
//! 2. **Cheapest synchronization that preserves correctness**: Locks cover
//!    only structural mutation (registering a ticker); appending and claiming
//!    use lock-free atomics.
//! 3. **No Floating Point**: Prices use fixed-point arithmetic (10^8 scaling).
//! 4. **Pre-allocated Memory**: Book slots are fixed arrays with stable
//!    indices, so no relocation ever invalidates a concurrent reader.
//!
//! ## Example
//!
//! ```
//! use tickmatch::{EngineConfig, MatchingEngine, Side};
//! use tickmatch::types::price::SCALE;
//!
//! let engine = MatchingEngine::new(EngineConfig::new(8, 64));
//!
//! // A resting sell: 50 shares of AAPL at 100.00
//! let resting = engine.submit_order(Side::Sell, "AAPL", 50, 100 * SCALE).unwrap();
//! assert!(resting.trades.is_empty());
//!
//! // An incoming buy at the same price crosses and trades 30 shares
//! let report = engine.submit_order(Side::Buy, "AAPL", 30, 100 * SCALE).unwrap();
//! assert_eq!(report.trades.len(), 1);
//! assert_eq!(report.trades[0].quantity, 30);
//! assert_eq!(report.trades[0].price, 100 * SCALE);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Engine capacity configuration
pub mod config;

/// Matching engine: ticker registry and the matching scan
pub mod engine;

/// Order book: fixed-capacity arrival-order storage
pub mod orderbook;

/// Claim-flag synchronization primitive
pub mod sync;

/// Core data types: Order, Side, Trade, RejectReason
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::EngineConfig;
pub use engine::{MatchingEngine, SubmitReport, TickerRegistry};
pub use orderbook::{BookSide, TickerBook};
pub use sync::AtomicFlag;
pub use types::{Order, RejectReason, Side, Trade};
