use crate::core::{constants::*, Address, Token};
use std::str::FromStr;

// Well-known Ethereum mainnet tokens
lazy_static::lazy_static! {
    pub static ref KNOWN_TOKENS: Vec<Token> = vec![
        Token::new("WETH", Address::from_str(WETH_ADDRESS).unwrap(), 18),
        Token::new("USDC", Address::from_str(USDC_ADDRESS).unwrap(), 6),
        Token::new("USDT", Address::from_str(USDT_ADDRESS).unwrap(), 6),
        Token::new("DAI", Address::from_str(DAI_ADDRESS).unwrap(), 18),
    ];
}

/// Look up a known token by symbol (case-insensitive). `ETH` maps to WETH.
pub fn find_by_symbol(symbol: &str) -> Option<Token> {
    let wanted = match symbol.to_uppercase().as_str() {
        "ETH" => "WETH".to_string(),
        other => other.to_string(),
    };

    KNOWN_TOKENS.iter().find(|t| t.symbol == wanted).cloned()
}

pub fn find_by_address(address: &Address) -> Option<Token> {
    KNOWN_TOKENS.iter().find(|t| t.address == *address).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_symbol() {
        let weth = find_by_symbol("eth").unwrap();
        assert_eq!(weth.symbol, "WETH");
        assert_eq!(weth.decimals, 18);

        assert_eq!(find_by_symbol("usdc").unwrap().decimals, 6);
        assert!(find_by_symbol("UNKNOWN").is_none());
    }

    #[test]
    fn test_find_by_address_ignores_case() {
        let addr = Address::from_str(&USDC_ADDRESS.to_lowercase()).unwrap();
        assert_eq!(find_by_address(&addr).unwrap().symbol, "USDC");
    }
}
