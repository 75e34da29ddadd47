//! Random-order simulation driver.
//!
//! Submits random limit orders against one shared engine from several
//! threads and logs the resulting trades. Usage:
//!
//! ```bash
//! tickmatch [NUM_ORDERS] [NUM_THREADS]   # defaults: 10000 orders, 4 threads
//! RUST_LOG=debug tickmatch 500 2         # include engine debug events
//! ```

use std::env;
use std::sync::Arc;
use std::thread;

use rand::Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tickmatch::types::price::{from_fixed_trimmed, SCALE};
use tickmatch::{EngineConfig, MatchingEngine, Side};

/// Ticker universe for the simulation.
const SAMPLE_TICKERS: [&str; 10] = [
    "AAPL", "AMZN", "MSFT", "GOOG", "TSLA", "NVDA", "META", "DIS", "NFLX", "INTC",
];

const DEFAULT_ORDERS: usize = 10_000;
const DEFAULT_THREADS: usize = 4;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let total_orders: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ORDERS);
    let num_threads: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_THREADS)
        .max(1);

    let engine = Arc::new(MatchingEngine::new(EngineConfig::default()));
    info!(total_orders, num_threads, "starting random-order simulation");

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let engine = engine.clone();
            // Spread the remainder over the first threads
            let count = total_orders / num_threads
                + usize::from(t < total_orders % num_threads);
            thread::spawn(move || simulate_orders(&engine, count))
        })
        .collect();

    let mut trades = 0usize;
    let mut rejected = 0usize;
    for handle in handles {
        let (thread_trades, thread_rejected) = handle.join().expect("simulation thread panicked");
        trades += thread_trades;
        rejected += thread_rejected;
    }

    info!(
        submitted = total_orders,
        trades,
        rejected,
        tickers = engine.ticker_count(),
        "simulation complete"
    );
}

/// Submit `count` random orders, logging trades and rejections.
///
/// Mirrors the shape of real order flow: random side, a ticker from the
/// sample universe, 1-100 shares, a whole-dollar price in 1.00-1000.00.
fn simulate_orders(engine: &MatchingEngine, count: usize) -> (usize, usize) {
    let mut rng = rand::thread_rng();
    let mut trades = 0usize;
    let mut rejected = 0usize;

    for _ in 0..count {
        let side = if rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        let ticker = SAMPLE_TICKERS[rng.gen_range(0..SAMPLE_TICKERS.len())];
        let quantity = rng.gen_range(1..=100u64);
        let price = rng.gen_range(1..=1000u64) * SCALE;

        match engine.submit_order(side, ticker, quantity, price) {
            Ok(report) => {
                for trade in &report.trades {
                    let symbol = engine.ticker_symbol(trade.ticker_index).unwrap_or(ticker);
                    info!(
                        ticker = symbol,
                        "TRADE: {:?} matched {:?} at {} for quantity={}",
                        side,
                        side.opposite(),
                        from_fixed_trimmed(trade.price),
                        trade.quantity
                    );
                }
                trades += report.trades.len();
            }
            Err(reason) => {
                warn!("{reason}");
                rejected += 1;
            }
        }
    }

    (trades, rejected)
}
