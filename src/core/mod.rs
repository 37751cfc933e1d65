pub mod config;
pub mod constants;
pub mod error;
pub mod tokens;
pub mod types;

pub use config::Config;
pub use constants::*;
pub use error::{QuoteError, QuoteResult};
pub use types::*;
