//! Engine capacity configuration.
//!
//! The engine is bounded by exactly two fixed capacities: how many distinct
//! tickers it can register, and how many resting orders each side of each
//! ticker's book can hold. Both are fixed at construction; the engine never
//! grows or relocates its storage, which is what makes book slots safe to
//! read concurrently by index.

/// Default maximum number of distinct ticker symbols.
pub const MAX_TICKERS: usize = 1024;

/// Default maximum resting orders per side, per ticker.
pub const MAX_ORDERS_PER_SIDE: usize = 10_000;

/// Fixed capacities for a [`MatchingEngine`](crate::MatchingEngine).
///
/// ## Example
///
/// ```
/// use tickmatch::EngineConfig;
///
/// let config = EngineConfig::new(64, 512);
/// assert_eq!(config.max_tickers, 64);
/// assert_eq!(config.max_orders_per_side, 512);
///
/// let defaults = EngineConfig::default();
/// assert_eq!(defaults.max_tickers, 1024);
/// assert_eq!(defaults.max_orders_per_side, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of distinct tickers the registry accepts.
    pub max_tickers: usize,

    /// Maximum resting orders per side, per ticker book.
    pub max_orders_per_side: usize,
}

impl EngineConfig {
    /// Create a configuration with explicit capacities.
    pub fn new(max_tickers: usize, max_orders_per_side: usize) -> Self {
        Self {
            max_tickers,
            max_orders_per_side,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(MAX_TICKERS, MAX_ORDERS_PER_SIDE)
    }
}
