//! Core data types for the matching core.
//!
//! ## Types
//!
//! - [`Order`]: A limit order occupying one book slot
//! - [`Side`]: Buy or Sell
//! - [`Trade`]: An executed match against a resting order
//! - [`RejectReason`]: Why a submission was dropped
//!
//! ## Numeric Representation
//!
//! Prices are `u64` fixed-point scaled by 10^8 (see [`price`]); quantities
//! are whole share counts. Example: a price of 50.25 is stored as
//! 5_025_000_000u64.

mod error;
mod order;
mod trade;
pub mod price;

// Re-export all types at module level
pub use error::RejectReason;
pub use order::{Order, Side};
pub use trade::Trade;
