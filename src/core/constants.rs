// Internal fixed precision (decimal digits) reserves are normalized to
pub const DEFAULT_PRECISION: u8 = 6;

// Largest precision / token decimals accepted (EVM standard)
pub const MAX_DECIMALS: u8 = 18;

// Common Ethereum mainnet token addresses
pub const WETH_ADDRESS: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const USDC_ADDRESS: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const USDT_ADDRESS: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
pub const DAI_ADDRESS: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

// Cache TTL in seconds
pub const POOL_CACHE_TTL: u64 = 30;

// Pool snapshot file read by the CLI
pub const DEFAULT_POOLS_FILE: &str = "pools.json";

// Significant digits shown for the exchange rate
pub const RATE_SIGNIFICANT_DIGITS: u32 = 4;
