pub mod pools;
pub mod quote;

use crate::core::{Config, QuoteResult};
use crate::discovery::{CachedPoolResolver, PoolCache, StaticPoolResolver};

/// Pool file named on the command line, falling back to the config
pub(crate) fn pools_path(arg: Option<&str>, config: &Config) -> String {
    arg.map(str::to_string)
        .unwrap_or_else(|| config.pools_file.clone())
}

pub(crate) fn load_resolver(
    path: &str,
    config: &Config,
) -> QuoteResult<CachedPoolResolver<StaticPoolResolver>> {
    let resolver = StaticPoolResolver::from_file(path)?;
    Ok(CachedPoolResolver::new(
        resolver,
        PoolCache::new(config.cache_ttl_secs),
    ))
}
