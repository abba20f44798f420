use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fitforlife_assets::{assets::AssetPaths, font::FontLocator};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    fitforlife_assets::generate_all(&AssetPaths::default(), &FontLocator::system())?;

    println!("Logo and favicon generated successfully!");
    Ok(())
}
