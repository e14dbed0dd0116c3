//! Configuration initialization command

use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &str, force: bool) -> Result<()> {
    if Path::new(config_path).exists() && !force {
        println!("Error: Configuration file already exists: {}", config_path);
        println!("Remove it first, use a different path, or pass --force.");
        return Ok(());
    }

    let config = Config::default();
    config.save(config_path)?;
    println!("✓ Configuration created: {}", config_path);

    Ok(())
}
