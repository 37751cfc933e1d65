use crate::core::{tokens, Address, PoolSnapshot, Quote, QuoteError, TradeRequest};
use crate::utils::{format_number, format_units};
use colored::*;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Display helper for quotes and pools
pub struct QuoteDisplay;

impl QuoteDisplay {
    /// Display a single quote
    pub fn display_quote(quote: &Quote) {
        println!(
            "{} {} → {}",
            style("►").cyan(),
            quote.from_token.symbol.bold(),
            quote.to_token.symbol.bold()
        );

        println!(
            "  {} {} → {} {}",
            format_units(&quote.scaled_in, quote.precision),
            quote.from_token.symbol,
            quote.display_amount(),
            quote.to_token.symbol
        );

        let rate = quote
            .exchange_rate()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  Rate: 1 {} = {} {}",
            quote.from_token.symbol, rate, quote.to_token.symbol
        );

        println!("  Route: Constant product pool");
        println!("{}", slippage_row(Some(quote.slippage_display_percent())));
        println!(
            "  Output (native units): {}",
            style(format_number(&quote.swap_balance_native())).dim()
        );
        println!();
    }

    /// Shown in place of a quote that could not be computed
    pub fn display_unavailable(request: &TradeRequest, error: &QuoteError) {
        println!(
            "{} {} → {}",
            style("►").cyan(),
            request.from_token.symbol.bold(),
            request.to_token.symbol.bold()
        );
        println!("{}", slippage_row(None));
        println!("  {} {}", error.kind().red().bold(), style(error.to_string()).dim());
        println!();
    }

    /// Display pool list
    pub fn display_pool_list(pools: &[&PoolSnapshot], detailed: bool) {
        println!("\n{}", style("🏊 Available Pools").bold().underlined());

        for (i, pool) in pools.iter().enumerate() {
            println!(
                "{}. {}/{}",
                i + 1,
                symbol_for(&pool.token0).blue().bold(),
                symbol_for(&pool.token1).blue().bold()
            );

            if detailed {
                if let Some(address) = &pool.address {
                    println!("   Address: {}", style(address.to_string()).dim());
                }
                println!(
                    "   Reserves: {} {} | {} {}",
                    format_reserve(&pool.token0, &pool.reserve0),
                    symbol_for(&pool.token0),
                    format_reserve(&pool.token1, &pool.reserve1),
                    symbol_for(&pool.token1)
                );
                println!("   token0: {}", style(pool.token0.to_string()).dim());
                println!("   token1: {}", style(pool.token1.to_string()).dim());
                println!();
            }
        }
    }

    /// Create a progress bar for operations
    pub fn create_progress_bar(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(spinner.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }
}

fn symbol_for(address: &Address) -> String {
    tokens::find_by_address(address)
        .map(|t| t.symbol)
        .unwrap_or_else(|| address.to_string())
}

/// Whole-token reserve for known tokens, raw integer otherwise
fn format_reserve(address: &Address, reserve: &num_bigint::BigUint) -> String {
    match tokens::find_by_address(address) {
        Some(token) => format_units(reserve, token.decimals),
        None => format_number(reserve),
    }
}

/// Slippage line of a quote, "-" when unavailable
fn slippage_row(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("  Slippage: {}", format_slippage(p)),
        None => "  Slippage: -".to_string(),
    }
}

/// Format slippage percent with color
fn format_slippage(percent: f64) -> ColoredString {
    let text = format!("{:.4}%", percent);
    if percent < 0.1 {
        text.green()
    } else if percent < 1.0 {
        text.yellow()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slippage_row() {
        let row = slippage_row(Some(0.05));
        assert!(row.starts_with("  Slippage: "));
        assert!(row.contains("0.0500%"));
        assert!(!row.contains("Fees"));

        assert_eq!(slippage_row(None), "  Slippage: -");
    }
}
