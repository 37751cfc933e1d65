pub mod constant_product;

use crate::core::{Quote, QuoteResult, TradeRequest};
use crate::discovery::PoolResolver;
use futures::future::join_all;
use log::{debug, info};
use std::sync::Arc;

pub use constant_product::{
    normalize_reserve, orient_reserves, rescale_reserve, swap_along_curve, CurveStep, QuoteEngine,
};

/// Resolves the pool for a trade and runs the quote engine over it
pub struct QuoteService {
    resolver: Arc<dyn PoolResolver>,
    engine: QuoteEngine,
}

impl QuoteService {
    pub fn new(resolver: Arc<dyn PoolResolver>, engine: QuoteEngine) -> Self {
        Self { resolver, engine }
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Quote a single trade. Resolver errors are returned as-is.
    pub async fn get_quote(&self, request: &TradeRequest) -> QuoteResult<Quote> {
        info!(
            "Converting {} {} to {}",
            request.amount, request.from_token.symbol, request.to_token.symbol
        );

        request.validate()?;

        let snapshot = self
            .resolver
            .resolve(&request.from_token.address, &request.to_token.address)
            .await?;

        debug!(
            "Resolved pool {:?}: {}={} / {}={}",
            snapshot.address, snapshot.token0, snapshot.reserve0, snapshot.token1, snapshot.reserve1
        );

        let quote = self.engine.compute_request(&snapshot, request)?;

        info!(
            "Estimated swap balance: {} {}",
            quote.display_amount(),
            request.to_token.symbol
        );
        info!("Slippage: {}%", quote.slippage_display_percent());

        Ok(quote)
    }

    /// Quote several trades concurrently, one result per request in order
    pub async fn get_quotes(&self, requests: &[TradeRequest]) -> Vec<QuoteResult<Quote>> {
        let futures = requests.iter().map(|request| self.get_quote(request));
        join_all(futures).await
    }
}
