pub mod pool_cache;
pub mod pool_resolver;

pub use pool_cache::PoolCache;
pub use pool_resolver::{CachedPoolResolver, PoolResolver, StaticPoolResolver};
