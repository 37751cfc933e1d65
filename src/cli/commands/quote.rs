use crate::cli::{display::QuoteDisplay, AmountUnit, QuoteArgs};
use crate::core::{Config, QuoteError, QuoteResult, Token, TradeAmount, TradeRequest};
use crate::quotes::{QuoteEngine, QuoteService};
use crate::utils::{parse_token_identifier, parse_units};
use colored::*;
use console::style;
use log::info;
use std::str::FromStr;
use std::sync::Arc;

pub async fn execute(args: QuoteArgs, config: Config) -> QuoteResult<()> {
    if !args.json {
        println!("{}", "🚀 Swap Quote".bold().cyan());
    }

    let from = parse_token_identifier(&args.from, args.from_decimals)?;
    let to = parse_token_identifier(&args.to, args.to_decimals)?;
    let amount = parse_amount(&args.amount, args.unit, &from)?;

    let pb = QuoteDisplay::create_progress_bar("Loading pools...");
    let path = super::pools_path(args.pools.as_deref(), &config);
    let resolver = super::load_resolver(&path, &config)?;
    let service = QuoteService::new(Arc::new(resolver), QuoteEngine::new(config.precision)?);

    let mut requests = vec![TradeRequest::new(from, to, amount)];
    if args.reverse {
        let reversed = requests[0].reversed();
        requests.push(reversed);
    }

    pb.set_message("Computing quotes...");
    info!("Quoting {} request(s) from {}", requests.len(), path);
    let results = service.get_quotes(&requests).await;
    pb.finish_and_clear();

    if args.json {
        let quotes = results.into_iter().collect::<QuoteResult<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&quotes)?);
        return Ok(());
    }

    let mut first_error = None;
    for (request, result) in requests.iter().zip(results) {
        match result {
            Ok(quote) => QuoteDisplay::display_quote(&quote),
            Err(e) => {
                QuoteDisplay::display_unavailable(request, &e);
                first_error.get_or_insert(e);
            }
        }
    }

    if !args.reverse {
        println!("{}", style("💡 Tip: Use --reverse to quote the opposite direction").dim());
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Turn the CLI amount into a unit-tagged trade amount for `token`
pub fn parse_amount(raw: &str, unit: AmountUnit, token: &Token) -> QuoteResult<TradeAmount> {
    match unit {
        AmountUnit::Whole if !raw.contains('.') => {
            Ok(TradeAmount::Whole(parse_units(raw, 0)?))
        }
        // fractional whole amounts are converted to native units up front
        AmountUnit::Whole => Ok(TradeAmount::Native(parse_units(raw, token.decimals)?)),
        AmountUnit::Native => Ok(TradeAmount::Native(parse_integer(raw)?)),
        AmountUnit::Internal => Ok(TradeAmount::Internal(parse_integer(raw)?)),
    }
}

fn parse_integer(raw: &str) -> QuoteResult<num_bigint::BigUint> {
    num_bigint::BigUint::from_str(raw.trim())
        .map_err(|_| QuoteError::InvalidRequest(format!("Amount must be a non-negative integer: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokens::find_by_symbol;
    use num_bigint::BigUint;

    #[test]
    fn test_parse_amount_units() {
        let weth = find_by_symbol("WETH").unwrap();

        assert_eq!(
            parse_amount("3", AmountUnit::Whole, &weth).unwrap(),
            TradeAmount::whole(3)
        );
        assert_eq!(
            parse_amount("0.5", AmountUnit::Whole, &weth).unwrap(),
            TradeAmount::Native(BigUint::from(500_000_000_000_000_000u64))
        );
        assert_eq!(
            parse_amount("1000", AmountUnit::Internal, &weth).unwrap(),
            TradeAmount::internal(1000)
        );
        assert!(parse_amount("-1", AmountUnit::Native, &weth).is_err());
        assert!(parse_amount("1.5", AmountUnit::Native, &weth).is_err());
    }
}
