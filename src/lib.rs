//! Constant-product swap quotes.
//!
//! Given a pool snapshot (two token addresses and their raw reserves) and a
//! trade, [`QuoteEngine`] computes the expected output amount and the
//! slippage relative to the pool's spot price. Pools are located through the
//! [`PoolResolver`] capability; [`QuoteService`] ties the two together.

pub mod cli;
pub mod core;
pub mod discovery;
pub mod quotes;
pub mod utils;

// Re-export commonly used types
pub use self::core::{
    Address, Config, PoolSnapshot, Quote, QuoteError, QuoteResult, Token, TradeAmount,
    TradeRequest,
};
pub use discovery::{CachedPoolResolver, PoolCache, PoolResolver, StaticPoolResolver};
pub use quotes::{QuoteEngine, QuoteService};
