//! The matching engine: submit-order entry point and the matching scan.

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::TickerRegistry;
use crate::orderbook::TickerBook;
use crate::types::{Order, RejectReason, Side, Trade};

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    /// Registry index the ticker resolved to
    pub ticker_index: usize,

    /// Slot the new order now rests in, on its own side
    pub slot: usize,

    /// Trades executed against the opposite side, in scan order
    pub trades: Vec<Trade>,
}

/// The matching core: ticker registry plus one pre-allocated book per
/// ticker slot.
///
/// Construct one instance and share it by reference; every method takes
/// `&self` and is safe to call from any number of threads concurrently.
pub struct MatchingEngine {
    config: EngineConfig,
    registry: TickerRegistry,
    books: Box<[TickerBook]>,
}

impl MatchingEngine {
    /// Create an engine with all ticker books pre-allocated.
    pub fn new(config: EngineConfig) -> Self {
        let books = (0..config.max_tickers)
            .map(|_| TickerBook::new(config.max_orders_per_side))
            .collect();

        Self {
            config,
            registry: TickerRegistry::new(config.max_tickers),
            books,
        }
    }

    /// The capacities this engine was built with.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The symbol registered at `index`, if any.
    pub fn ticker_symbol(&self, index: usize) -> Option<&str> {
        self.registry.symbol(index)
    }

    /// Number of tickers registered so far.
    pub fn ticker_count(&self) -> usize {
        self.registry.len()
    }

    /// The book at a ticker's registry index.
    pub fn book(&self, ticker_index: usize) -> Option<&TickerBook> {
        self.books.get(ticker_index)
    }

    /// Submit a limit order: insert it into its side's book, then match it
    /// against the opposite side.
    ///
    /// The scan uses the original submitted quantity and price. The new
    /// order itself rests on `side` and is never a candidate during its own
    /// submission; it becomes a matching target for later opposite-side
    /// submissions.
    ///
    /// # Preconditions
    ///
    /// `quantity` and `price` must be positive; the core does not validate
    /// them.
    ///
    /// # Errors
    ///
    /// [`RejectReason::TickerCapacityExceeded`] when the registry is full
    /// for an unseen symbol, [`RejectReason::BookCapacityExceeded`] when the
    /// side's storage is full. Both drop the order and leave the engine
    /// fully usable.
    pub fn submit_order(
        &self,
        side: Side,
        ticker: &str,
        quantity: u64,
        price: u64,
    ) -> Result<SubmitReport, RejectReason> {
        let ticker_index =
            self.registry
                .resolve(ticker)
                .map_err(|_| RejectReason::TickerCapacityExceeded {
                    symbol: ticker.to_owned(),
                })?;

        let order = Box::new(Order::new(side, ticker, quantity, price));
        let slot = self.books[ticker_index]
            .side(side)
            .append(order)
            .map_err(|_| RejectReason::BookCapacityExceeded {
                symbol: ticker.to_owned(),
                side,
            })?;

        let trades = self.match_order(ticker_index, side, quantity, price);
        Ok(SubmitReport {
            ticker_index,
            slot,
            trades,
        })
    }

    /// Walk the opposite side in arrival order, claiming eligible resting
    /// orders until the incoming quantity is satisfied or the scan window
    /// is exhausted.
    fn match_order(
        &self,
        ticker_index: usize,
        incoming_side: Side,
        mut remaining: u64,
        limit_price: u64,
    ) -> Vec<Trade> {
        let resting = self.books[ticker_index].side(incoming_side.opposite());

        // Snapshot of the occupied-count at scan start; orders appended
        // after this point are not considered.
        let scan_end = resting.len();
        let mut trades = Vec::new();

        for slot in 0..scan_end {
            if remaining == 0 {
                break;
            }

            // A claimed-but-unpublished slot reads as absent; skip it.
            let Some(order) = resting.get(slot) else {
                continue;
            };
            if !order.is_active() {
                continue;
            }

            let crosses = match incoming_side {
                Side::Buy => order.price <= limit_price,
                Side::Sell => order.price >= limit_price,
            };
            if !crosses {
                continue;
            }

            // Race for the claim; on loss move to the next slot without
            // re-checking eligibility.
            if !order.claim() {
                continue;
            }

            // This caller now exclusively owns the trade. The resting
            // order is retired with its full original quantity even when
            // the trade consumes less.
            let quantity = order.quantity.min(remaining);
            remaining -= quantity;

            debug!(
                ticker_index,
                slot,
                price = order.price,
                quantity,
                "matched resting order"
            );
            trades.push(Trade {
                ticker_index,
                taker_side: incoming_side,
                maker_slot: slot,
                price: order.price,
                quantity,
            });
        }

        trades
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::SCALE;

    fn engine(max_tickers: usize, per_side: usize) -> MatchingEngine {
        MatchingEngine::new(EngineConfig::new(max_tickers, per_side))
    }

    fn px(dollars: u64) -> u64 {
        dollars * SCALE
    }

    #[test]
    fn test_no_resting_orders_no_trades() {
        let engine = engine(4, 16);
        let report = engine
            .submit_order(Side::Buy, "AAPL", 10, px(50))
            .unwrap();

        assert_eq!(report.ticker_index, 0);
        assert_eq!(report.slot, 0);
        assert!(report.trades.is_empty());
    }

    #[test]
    fn test_resting_buy_discoverable_by_later_sell() {
        let engine = engine(4, 16);
        engine.submit_order(Side::Buy, "AAPL", 10, px(50)).unwrap();

        let report = engine
            .submit_order(Side::Sell, "AAPL", 10, px(50))
            .unwrap();

        assert_eq!(report.trades.len(), 1);
        assert_eq!(report.trades[0].price, px(50));
        assert_eq!(report.trades[0].quantity, 10);
        assert_eq!(report.trades[0].taker_side, Side::Sell);
        assert_eq!(report.trades[0].maker_slot, 0);
    }

    #[test]
    fn test_partial_fill_retires_whole_resting_order() {
        let engine = engine(4, 16);
        engine
            .submit_order(Side::Sell, "AAPL", 50, px(100))
            .unwrap();

        let report = engine
            .submit_order(Side::Buy, "AAPL", 30, px(100))
            .unwrap();
        assert_eq!(report.trades.len(), 1);
        assert_eq!(report.trades[0].price, px(100));
        assert_eq!(report.trades[0].quantity, 30);

        // The sell's remaining 20 units were discarded with the claim; a
        // later buy finds nothing.
        let report = engine
            .submit_order(Side::Buy, "AAPL", 20, px(100))
            .unwrap();
        assert!(report.trades.is_empty());
    }

    #[test]
    fn test_price_crossing_rule() {
        let engine = engine(4, 16);
        engine
            .submit_order(Side::Sell, "AAPL", 10, px(100))
            .unwrap();

        // Buy below the resting sell price does not cross
        let report = engine.submit_order(Side::Buy, "AAPL", 10, px(99)).unwrap();
        assert!(report.trades.is_empty());

        // Buy at exactly the resting price crosses
        let report = engine
            .submit_order(Side::Buy, "AAPL", 10, px(100))
            .unwrap();
        assert_eq!(report.trades.len(), 1);
        assert_eq!(report.trades[0].price, px(100));
    }

    #[test]
    fn test_price_crossing_rule_sell_incoming() {
        let engine = engine(4, 16);
        engine.submit_order(Side::Buy, "AAPL", 10, px(100)).unwrap();

        // Sell above the resting buy price does not cross
        let report = engine
            .submit_order(Side::Sell, "AAPL", 10, px(101))
            .unwrap();
        assert!(report.trades.is_empty());

        // Sell at or below the resting buy price crosses
        let report = engine
            .submit_order(Side::Sell, "AAPL", 10, px(100))
            .unwrap();
        assert_eq!(report.trades.len(), 1);
        assert_eq!(report.trades[0].price, px(100));
    }

    #[test]
    fn test_arrival_order_beats_better_price() {
        let engine = engine(4, 16);
        engine
            .submit_order(Side::Sell, "AAPL", 10, px(90))
            .unwrap();
        engine
            .submit_order(Side::Sell, "AAPL", 10, px(80))
            .unwrap();

        // Both sells cross, but the earlier-arrived 90 wins despite the
        // cheaper 80 sitting behind it.
        let report = engine.submit_order(Side::Buy, "AAPL", 10, px(95)).unwrap();
        assert_eq!(report.trades.len(), 1);
        assert_eq!(report.trades[0].price, px(90));
        assert_eq!(report.trades[0].maker_slot, 0);
    }

    #[test]
    fn test_incoming_sweeps_multiple_resting_orders() {
        let engine = engine(4, 16);
        engine.submit_order(Side::Sell, "AAPL", 10, px(90)).unwrap();
        engine.submit_order(Side::Sell, "AAPL", 10, px(85)).unwrap();
        engine.submit_order(Side::Sell, "AAPL", 10, px(80)).unwrap();

        let report = engine.submit_order(Side::Buy, "AAPL", 25, px(95)).unwrap();
        assert_eq!(report.trades.len(), 3);

        // Arrival order, trade prices are the resting prices
        let prices: Vec<u64> = report.trades.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![px(90), px(85), px(80)]);

        // The last trade is capped at the remaining 5 units
        let quantities: Vec<u64> = report.trades.iter().map(|t| t.quantity).collect();
        assert_eq!(quantities, vec![10, 10, 5]);
    }

    #[test]
    fn test_ticker_capacity_rejection() {
        let engine = engine(2, 16);
        engine.submit_order(Side::Buy, "AAPL", 1, px(1)).unwrap();
        engine.submit_order(Side::Buy, "MSFT", 1, px(1)).unwrap();

        let err = engine
            .submit_order(Side::Buy, "TSLA", 1, px(1))
            .unwrap_err();
        assert_eq!(
            err,
            RejectReason::TickerCapacityExceeded {
                symbol: "TSLA".to_owned()
            }
        );

        // Known tickers keep working after the rejection
        assert!(engine.submit_order(Side::Buy, "AAPL", 1, px(1)).is_ok());
        assert_eq!(engine.ticker_count(), 2);
    }

    #[test]
    fn test_book_capacity_rejection() {
        let engine = engine(2, 2);
        engine.submit_order(Side::Buy, "AAPL", 1, px(1)).unwrap();
        engine.submit_order(Side::Buy, "AAPL", 1, px(1)).unwrap();

        let err = engine
            .submit_order(Side::Buy, "AAPL", 1, px(1))
            .unwrap_err();
        assert_eq!(
            err,
            RejectReason::BookCapacityExceeded {
                symbol: "AAPL".to_owned(),
                side: Side::Buy,
            }
        );

        // The sell side of the same book is unaffected (price chosen not
        // to cross the resting buys).
        assert!(engine
            .submit_order(Side::Sell, "AAPL", 1, px(10))
            .is_ok());
    }

    #[test]
    fn test_books_are_per_ticker() {
        let engine = engine(4, 16);
        engine
            .submit_order(Side::Sell, "AAPL", 10, px(100))
            .unwrap();

        // A crossing buy on a different ticker finds nothing
        let report = engine
            .submit_order(Side::Buy, "MSFT", 10, px(100))
            .unwrap();
        assert!(report.trades.is_empty());

        assert_eq!(engine.ticker_symbol(0), Some("AAPL"));
        assert_eq!(engine.ticker_symbol(1), Some("MSFT"));
    }

    #[test]
    fn test_claimed_order_stays_in_slot_inactive() {
        let engine = engine(4, 16);
        let resting = engine
            .submit_order(Side::Sell, "AAPL", 10, px(100))
            .unwrap();
        engine
            .submit_order(Side::Buy, "AAPL", 10, px(100))
            .unwrap();

        let book = engine.book(resting.ticker_index).unwrap();
        let order = book.sells().get(resting.slot).unwrap();
        assert!(!order.is_active());
        assert_eq!(order.quantity, 10);
        assert_eq!(book.sells().len(), 1);
    }
}
