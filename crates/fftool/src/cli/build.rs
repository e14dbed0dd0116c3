//! Manifest build command

use crate::output::write_attributes;
use crate::{Config, Manifest};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub async fn run(config: &Config, manifest_path: PathBuf, output: PathBuf) -> Result<()> {
    let manifest = Manifest::load(&manifest_path).await?;
    let target = manifest.target.clone().unwrap_or_else(|| "file".to_string());
    let base_dir = manifest_path.parent().unwrap_or(Path::new("."));

    tracing::info!(
        "Building metadata for '{}' ({} resources)",
        target,
        manifest.resources.len()
    );

    let attrs = manifest.into_attributes(base_dir).await?;
    let written = write_attributes(&attrs, &output, &target, config).await?;
    for path in written {
        println!("✓ {}", path.display());
    }

    Ok(())
}
