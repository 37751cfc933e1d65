use crate::core::{tokens, Address, QuoteError, QuoteResult, Token};
use num_bigint::BigUint;
use num_traits::Zero;
use std::str::FromStr;

/// Resolve a token symbol or address into a [`Token`].
///
/// Known symbols and addresses come from the built-in registry. An unknown
/// address needs `decimals` supplied by the caller.
pub fn parse_token_identifier(input: &str, decimals: Option<u8>) -> QuoteResult<Token> {
    if let Ok(address) = Address::from_str(input) {
        if let Some(mut token) = tokens::find_by_address(&address) {
            if let Some(d) = decimals {
                token.decimals = d;
            }
            return Ok(token);
        }
        let decimals = decimals.ok_or_else(|| {
            QuoteError::InvalidRequest(format!("Unknown token {}: decimals required", input))
        })?;
        let symbol = format!("{}…", &address.as_str()[..8]);
        return Ok(Token::new(symbol, address, decimals));
    }

    tokens::find_by_symbol(input)
        .ok_or_else(|| QuoteError::InvalidRequest(format!("Unknown token: {}", input)))
}

/// Render `amount` with `decimals` fractional digits, trailing zeros trimmed
pub fn format_units(amount: &BigUint, decimals: u8) -> String {
    let digits = amount.to_str_radix(10);
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Parse a decimal string such as `"1.5"` into `decimals`-scaled units
pub fn parse_units(input: &str, decimals: u8) -> QuoteResult<BigUint> {
    let input = input.trim();
    let invalid = || QuoteError::InvalidRequest(format!("Invalid amount: {}", input));

    if input.starts_with('-') {
        return Err(QuoteError::InvalidRequest(format!(
            "Amount cannot be negative: {}",
            input
        )));
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(QuoteError::InvalidRequest(format!(
            "Amount {} has more than {} decimal places",
            input, decimals
        )));
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = format!(
        "{}{:0<width$}",
        whole,
        fraction,
        width = decimals as usize
    );
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::from_str(&digits).map_err(|_| invalid())
}

/// Format large numbers with thousands separators
pub fn format_number(n: &BigUint) -> String {
    let s = n.to_str_radix(10);
    let mut result = String::new();
    let mut count = 0;

    for ch in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}
