//! Matching engine module.
//!
//! ## Design
//!
//! The engine owns the ticker registry and one pre-allocated book per
//! possible ticker slot. Its whole API takes `&self`, so a single engine
//! instance is shared by reference across any number of submitting threads;
//! it is constructed once and needs no teardown.
//!
//! ## Matching Rules
//!
//! - An incoming **Buy** scans resting **Sells**; eligible when the resting
//!   price <= the incoming limit price (symmetric for Sell vs resting Buys)
//! - Resting orders are scanned in **arrival order**, not price order; the
//!   first eligible order wins even if a later one has a better price
//! - A claimed resting order is retired with its full original quantity
//!
//! ## Example
//!
//! ```
//! use tickmatch::{EngineConfig, MatchingEngine, Side};
//! use tickmatch::types::price::SCALE;
//!
//! let engine = MatchingEngine::new(EngineConfig::new(8, 64));
//!
//! engine.submit_order(Side::Sell, "AAPL", 50, 100 * SCALE).unwrap();
//! let report = engine.submit_order(Side::Buy, "AAPL", 30, 100 * SCALE).unwrap();
//!
//! assert_eq!(report.trades.len(), 1);
//! assert_eq!(report.trades[0].price, 100 * SCALE);
//! assert_eq!(report.trades[0].quantity, 30);
//! ```

pub mod matcher;
pub mod registry;

pub use matcher::{MatchingEngine, SubmitReport};
pub use registry::{RegistryFull, TickerRegistry};
