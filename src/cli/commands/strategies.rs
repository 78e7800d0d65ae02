//! List strategies command.

use anyhow::Result;
use quarks_strategies::StrategyRegistry;

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available strategies:\n");
    for info in registry.list() {
        println!("  {:<16} {}", info.id, info.description);
    }

    Ok(())
}
