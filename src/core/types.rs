use crate::core::{QuoteError, QuoteResult};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EVM account address (`0x` + 40 hex characters).
///
/// Stored lower-cased, so a checksummed address and its lower-case form
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| QuoteError::InvalidRequest(format!("Address must start with 0x: {}", s)))?;

        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(QuoteError::InvalidRequest(format!(
                "Address must be 40 hex characters: {}",
                s
            )));
        }

        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for Address {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
}

impl Token {
    pub fn new(symbol: impl Into<String>, address: Address, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            address,
            decimals,
        }
    }
}

// Tokens are identified by address alone
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Reserves of a two-token pool as reported at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub token0: Address,
    pub token1: Address,
    #[serde(with = "biguint_string")]
    pub reserve0: BigUint,
    #[serde(with = "biguint_string")]
    pub reserve1: BigUint,
}

impl PoolSnapshot {
    pub fn new(token0: Address, reserve0: BigUint, token1: Address, reserve1: BigUint) -> Self {
        Self {
            address: None,
            token0,
            token1,
            reserve0,
            reserve1,
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn contains(&self, token: &Address) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Raw reserve held for `token`, if the token belongs to this pool
    pub fn reserve_of(&self, token: &Address) -> Option<&BigUint> {
        if self.token0 == *token {
            Some(&self.reserve0)
        } else if self.token1 == *token {
            Some(&self.reserve1)
        } else {
            None
        }
    }
}

/// Amount offered by the taker, tagged with the unit it is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum TradeAmount {
    /// Whole tokens, scaled by `10^P`
    Whole(#[serde(with = "biguint_string")] BigUint),
    /// Already at the internal precision `P`
    Internal(#[serde(with = "biguint_string")] BigUint),
    /// Raw native units, truncated by `10^(decimals - P)`
    Native(#[serde(with = "biguint_string")] BigUint),
}

impl TradeAmount {
    pub fn whole(value: u64) -> Self {
        TradeAmount::Whole(BigUint::from(value))
    }

    pub fn internal(value: u64) -> Self {
        TradeAmount::Internal(BigUint::from(value))
    }

    pub fn native(value: u64) -> Self {
        TradeAmount::Native(BigUint::from(value))
    }

    pub fn value(&self) -> &BigUint {
        match self {
            TradeAmount::Whole(v) | TradeAmount::Internal(v) | TradeAmount::Native(v) => v,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Convert to internal units for a token with `decimals` native decimals.
    pub fn to_internal(&self, decimals: u8, precision: u8) -> QuoteResult<BigUint> {
        match self {
            TradeAmount::Whole(v) => Ok(v * pow10(precision as u32)),
            TradeAmount::Internal(v) => Ok(v.clone()),
            TradeAmount::Native(v) => {
                if decimals < precision {
                    return Err(QuoteError::InvalidPool(format!(
                        "token decimals {} are below internal precision {}",
                        decimals, precision
                    )));
                }
                Ok(v / pow10((decimals - precision) as u32))
            }
        }
    }
}

impl fmt::Display for TradeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAmount::Whole(v) => write!(f, "{}", v),
            TradeAmount::Internal(v) => write!(f, "{} (internal)", v),
            TradeAmount::Native(v) => write!(f, "{} (native)", v),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TradeRequest {
    pub from_token: Token,
    pub to_token: Token,
    pub amount: TradeAmount,
}

impl TradeRequest {
    pub fn new(from_token: Token, to_token: Token, amount: TradeAmount) -> Self {
        Self {
            from_token,
            to_token,
            amount,
        }
    }

    /// Boundary checks that do not need pool data
    pub fn validate(&self) -> QuoteResult<()> {
        if self.from_token == self.to_token {
            return Err(QuoteError::InvalidRequest(format!(
                "Cannot swap {} to itself",
                self.from_token.symbol
            )));
        }

        if self.amount.is_zero() {
            return Err(QuoteError::InvalidRequest(
                "Amount must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Same trade in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            from_token: self.to_token.clone(),
            to_token: self.from_token.clone(),
            amount: self.amount.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub from_token: Token,
    pub to_token: Token,
    /// Output amount at the internal precision
    #[serde(with = "biguint_string")]
    pub swap_balance: BigUint,
    /// `1 - price_paid / market_price`; 0 means no slippage
    pub slippage_percent: f64,
    #[serde(with = "biguint_string")]
    pub scaled_in: BigUint,
    pub market_price: f64,
    pub price_paid: f64,
    pub precision: u8,
}

impl Quote {
    /// Output amount in the to-token's native units
    pub fn swap_balance_native(&self) -> BigUint {
        let shift = self.to_token.decimals.saturating_sub(self.precision);
        &self.swap_balance * pow10(shift as u32)
    }

    /// Output amount in whole to-tokens, e.g. `"1.999"`
    pub fn display_amount(&self) -> String {
        crate::utils::format_units(&self.swap_balance, self.precision)
    }

    pub fn slippage_display_percent(&self) -> f64 {
        self.slippage_percent * 100.0
    }

    /// Whole to-tokens received per whole from-token
    pub fn exchange_rate(&self) -> Option<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        rust_decimal::Decimal::from_f64(self.price_paid)?
            .round_sf(crate::core::RATE_SIGNIFICANT_DIGITS)
            .map(|d| d.normalize())
    }
}

/// `10^exp` as a big integer
pub fn pow10(exp: u32) -> BigUint {
    num_traits::pow(BigUint::from(10u8), exp as usize)
}

/// Serialize big integers as decimal strings so JSON consumers keep precision.
pub(crate) mod biguint_string {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        BigUint::from_str(raw.trim()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    #[test]
    fn test_address_case_insensitive() {
        let checksummed: Address = WETH.parse().unwrap();
        let lower: Address = WETH.to_lowercase().parse().unwrap();
        assert_eq!(checksummed, lower);
        assert_eq!(checksummed.as_str(), "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    }

    #[test]
    fn test_address_rejects_malformed() {
        assert!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".parse::<Address>().is_err());
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xZZ2aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".parse::<Address>().is_err());
    }

    #[test]
    fn test_token_equality_by_address() {
        let a = Token::new("WETH", WETH.parse().unwrap(), 18);
        let b = Token::new("ETH", WETH.to_lowercase().parse().unwrap(), 18);
        assert_eq!(a, b);
    }

    #[test]
    fn test_trade_amount_units() {
        assert_eq!(
            TradeAmount::whole(2).to_internal(18, 6).unwrap(),
            BigUint::from(2_000_000u64)
        );
        assert_eq!(
            TradeAmount::internal(1_000).to_internal(18, 6).unwrap(),
            BigUint::from(1_000u64)
        );
        // 1.5 WETH in wei -> 1_500_000 internal units
        assert_eq!(
            TradeAmount::Native(BigUint::from(1_500_000_000_000_000_000u128))
                .to_internal(18, 6)
                .unwrap(),
            BigUint::from(1_500_000u64)
        );
        assert!(TradeAmount::native(100).to_internal(4, 6).is_err());
    }

    #[test]
    fn test_request_validation() {
        let weth = Token::new("WETH", WETH.parse().unwrap(), 18);
        let usdc = Token::new("USDC", USDC.parse().unwrap(), 6);

        let same = TradeRequest::new(weth.clone(), weth.clone(), TradeAmount::whole(1));
        assert!(matches!(same.validate(), Err(QuoteError::InvalidRequest(_))));

        let zero = TradeRequest::new(weth.clone(), usdc.clone(), TradeAmount::whole(0));
        assert!(matches!(zero.validate(), Err(QuoteError::InvalidRequest(_))));

        let ok = TradeRequest::new(weth, usdc, TradeAmount::whole(1));
        assert!(ok.validate().is_ok());
        assert_eq!(ok.reversed().from_token.symbol, "USDC");
    }

    #[test]
    fn test_snapshot_json() {
        let json = format!(
            r#"{{"token0":"{}","token1":"{}","reserve0":"123456789012345678901234567890","reserve1":"42"}}"#,
            USDC, WETH
        );
        let snapshot: PoolSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(
            snapshot.reserve0,
            BigUint::from_str("123456789012345678901234567890").unwrap()
        );
        assert_eq!(snapshot.reserve_of(&WETH.parse().unwrap()), Some(&BigUint::from(42u8)));
        assert!(snapshot.address.is_none());

        let back = serde_json::to_string(&snapshot).unwrap();
        assert!(back.contains("\"reserve1\":\"42\""));
    }

    #[test]
    fn test_trade_amount_json() {
        let json = serde_json::to_value(TradeAmount::Native(pow10(24))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"unit": "native", "value": "1000000000000000000000000"})
        );
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigUint::from(1u8));
        assert_eq!(pow10(12), BigUint::from(1_000_000_000_000u64));
    }
}
