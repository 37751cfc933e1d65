use crate::cli::{display::QuoteDisplay, PoolsArgs};
use crate::core::{Config, QuoteResult};
use colored::*;
use log::info;

pub async fn execute(args: PoolsArgs, config: Config) -> QuoteResult<()> {
    println!("{}", "🚀 Pool Snapshot Listing".bold().cyan());

    let path = super::pools_path(args.pools.as_deref(), &config);
    let resolver = super::load_resolver(&path, &config)?;
    let snapshots = resolver.inner().snapshots();

    info!("Listing {} pools from {}", snapshots.len(), path);

    if snapshots.is_empty() {
        println!("{}", "❌ No pools found in pool file".red().bold());
        return Ok(());
    }

    QuoteDisplay::display_pool_list(&snapshots, args.detailed);

    if !args.detailed {
        println!(
            "{}",
            "💡 Tip: Use --detailed flag for raw reserves".dimmed()
        );
    }

    Ok(())
}
