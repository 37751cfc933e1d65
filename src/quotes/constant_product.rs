use crate::core::{
    pow10, Address, PoolSnapshot, Quote, QuoteError, QuoteResult, Token, TradeAmount,
    TradeRequest, DEFAULT_PRECISION, MAX_DECIMALS,
};
use log::debug;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Pool state after moving along the x * y = k curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveStep {
    pub k: BigUint,
    pub new_from_reserve: BigUint,
    pub new_to_reserve: BigUint,
    pub swap_balance: BigUint,
}

/// Constant product (x * y = k) quote engine.
///
/// Reserves are normalized to a fixed internal precision before any math, so
/// tokens with different native decimals share one integer scale. Holds no
/// state besides that precision; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine {
    precision: u8,
}

impl QuoteEngine {
    pub fn new(precision: u8) -> QuoteResult<Self> {
        if precision > MAX_DECIMALS {
            return Err(QuoteError::ConfigError(format!(
                "Precision {} exceeds maximum of {}",
                precision, MAX_DECIMALS
            )));
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn compute_request(
        &self,
        snapshot: &PoolSnapshot,
        request: &TradeRequest,
    ) -> QuoteResult<Quote> {
        self.compute_quote(snapshot, &request.from_token, &request.to_token, &request.amount)
    }

    /// Expected output and slippage for selling `amount` of `from` into the pool
    pub fn compute_quote(
        &self,
        snapshot: &PoolSnapshot,
        from: &Token,
        to: &Token,
        amount: &TradeAmount,
    ) -> QuoteResult<Quote> {
        if from == to {
            return Err(QuoteError::InvalidRequest(format!(
                "Cannot swap {} to itself",
                from.symbol
            )));
        }
        if amount.is_zero() {
            return Err(QuoteError::InvalidRequest(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let (raw_from, raw_to) = orient_reserves(snapshot, &from.address, &to.address)?;
        let from_reserve = normalize_reserve(raw_from, from.decimals, self.precision)?;
        let to_reserve = normalize_reserve(raw_to, to.decimals, self.precision)?;

        if from_reserve.is_zero() || to_reserve.is_zero() {
            return Err(QuoteError::InvalidPool(format!(
                "Pool has zero reserves after normalization ({}={}, {}={})",
                from.symbol, from_reserve, to.symbol, to_reserve
            )));
        }

        let scaled_in = amount.to_internal(from.decimals, self.precision)?;
        if scaled_in.is_zero() {
            return Err(QuoteError::InvalidRequest(format!(
                "Amount {} is below the smallest internal unit of {}",
                amount, from.symbol
            )));
        }

        let market_price = to_f64(&to_reserve, "to reserve")? / to_f64(&from_reserve, "from reserve")?;

        debug!(
            "CP Quote: scaled_in={}, from_reserve={}, to_reserve={}, market_price={}",
            scaled_in, from_reserve, to_reserve, market_price
        );

        let step = swap_along_curve(&from_reserve, &to_reserve, &scaled_in)?;

        let price_paid = to_f64(&step.swap_balance, "swap balance")? / to_f64(&scaled_in, "amount in")?;
        let slippage_percent = 1.0 - price_paid / market_price;

        if !slippage_percent.is_finite() {
            return Err(QuoteError::ArithmeticOverflow(
                "slippage is not a finite number".to_string(),
            ));
        }

        debug!(
            "CP Quote: new_from_reserve={}, new_to_reserve={}, swap_balance={}, slippage={}",
            step.new_from_reserve, step.new_to_reserve, step.swap_balance, slippage_percent
        );

        Ok(Quote {
            from_token: from.clone(),
            to_token: to.clone(),
            swap_balance: step.swap_balance,
            slippage_percent,
            scaled_in,
            market_price,
            price_paid,
            precision: self.precision,
        })
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Convert a raw reserve to internal units: `raw / 10^(decimals - precision)`.
///
/// Tokens with fewer native decimals than the internal precision are not
/// supported.
pub fn normalize_reserve(raw: &BigUint, decimals: u8, precision: u8) -> QuoteResult<BigUint> {
    if decimals < precision {
        return Err(QuoteError::InvalidPool(format!(
            "token decimals {} are below internal precision {}",
            decimals, precision
        )));
    }
    Ok(raw / pow10((decimals - precision) as u32))
}

/// Inverse of [`normalize_reserve`], minus whatever truncation discarded
pub fn rescale_reserve(internal: &BigUint, decimals: u8, precision: u8) -> BigUint {
    internal * pow10(decimals.saturating_sub(precision) as u32)
}

/// Pick `(from_reserve, to_reserve)` out of the snapshot by token address
pub fn orient_reserves<'a>(
    snapshot: &'a PoolSnapshot,
    from: &Address,
    to: &Address,
) -> QuoteResult<(&'a BigUint, &'a BigUint)> {
    if snapshot.token0 == *from && snapshot.token1 == *to {
        Ok((&snapshot.reserve0, &snapshot.reserve1))
    } else if snapshot.token1 == *from && snapshot.token0 == *to {
        Ok((&snapshot.reserve1, &snapshot.reserve0))
    } else {
        Err(QuoteError::InvalidPool(format!(
            "Pool {}/{} does not hold pair {}/{}",
            snapshot.token0, snapshot.token1, from, to
        )))
    }
}

/// Add `scaled_in` to the from side and recompute the to side from k.
///
/// The new to reserve is floored, which is where truncation enters.
pub fn swap_along_curve(
    from_reserve: &BigUint,
    to_reserve: &BigUint,
    scaled_in: &BigUint,
) -> QuoteResult<CurveStep> {
    if from_reserve.is_zero() {
        return Err(QuoteError::InvalidPool("from reserve is zero".to_string()));
    }

    let k = from_reserve * to_reserve;
    let new_from_reserve = from_reserve + scaled_in;
    let new_to_reserve = &k / &new_from_reserve;

    if new_to_reserve > *to_reserve {
        // only possible on a broken invariant; keep subtraction safe
        return Err(QuoteError::ArithmeticOverflow(
            "new to reserve exceeds current reserve".to_string(),
        ));
    }
    let swap_balance = to_reserve - &new_to_reserve;

    Ok(CurveStep {
        k,
        new_from_reserve,
        new_to_reserve,
        swap_balance,
    })
}

fn to_f64(value: &BigUint, what: &str) -> QuoteResult<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| QuoteError::ArithmeticOverflow(format!("{} does not fit in f64", what)))
}
