//! Custom icon command

use crate::Config;
use crate::output::write_attributes;
use anyhow::{Context, Result};
use ffcore::FinderAttributes;
use std::path::PathBuf;

pub async fn run(
    config: &Config,
    icns: PathBuf,
    output: PathBuf,
    id: Option<i16>,
    target: Option<String>,
) -> Result<()> {
    let data = tokio::fs::read(&icns)
        .await
        .with_context(|| format!("Failed to read icon {}", icns.display()))?;

    let id = id.unwrap_or(config.icon.resource_id);
    let mut attrs = FinderAttributes::new();
    attrs.set_custom_icon(data, id, config.icon.set_custom_icon_flag);

    let target = target.unwrap_or_else(|| "file".to_string());

    tracing::info!("Attaching {} as custom icon (id {})", icns.display(), id);
    let written = write_attributes(&attrs, &output, &target, config).await?;
    for path in written {
        println!("✓ {}", path.display());
    }

    Ok(())
}
