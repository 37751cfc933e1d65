use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;
pub mod display;

#[derive(Parser)]
#[command(name = "swap-quoter")]
#[command(about = "Constant-product swap quotes with slippage estimates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote the output and slippage of a swap
    Quote(QuoteArgs),

    /// List the pools in the pool file
    Pools(PoolsArgs),
}

/// Unit the amount argument is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AmountUnit {
    /// Whole tokens, fractions allowed (e.g. 1.5)
    Whole,
    /// Raw on-chain units of the input token
    Native,
    /// Units at the engine's internal precision
    Internal,
}

#[derive(Parser)]
pub struct QuoteArgs {
    /// Input token symbol or address
    pub from: String,

    /// Output token symbol or address
    pub to: String,

    /// Amount of the input token to sell
    pub amount: String,

    /// Unit of the amount
    #[arg(short, long, value_enum, default_value_t = AmountUnit::Whole)]
    pub unit: AmountUnit,

    /// Decimals of the input token, required for unknown addresses
    #[arg(long)]
    pub from_decimals: Option<u8>,

    /// Decimals of the output token, required for unknown addresses
    #[arg(long)]
    pub to_decimals: Option<u8>,

    /// Pool snapshot file (overrides POOLS_FILE)
    #[arg(short, long, env = "POOLS_FILE")]
    pub pools: Option<String>,

    /// Also quote the same amount in the opposite direction
    #[arg(short, long)]
    pub reverse: bool,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct PoolsArgs {
    /// Pool snapshot file (overrides POOLS_FILE)
    #[arg(short, long, env = "POOLS_FILE")]
    pub pools: Option<String>,

    /// Show raw reserves and pool addresses
    #[arg(short, long)]
    pub detailed: bool,
}
