//! Writing encoded artifacts to disk

use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use ffcore::FinderAttributes;
use std::path::{Path, PathBuf};

/// Write one artifact in the configured format
pub async fn write_artifact(path: &Path, data: &[u8], format: OutputFormat) -> Result<()> {
    let contents = match format {
        OutputFormat::Raw => data.to_vec(),
        OutputFormat::Hex => format!("{}\n", hex::encode(data)).into_bytes(),
    };

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Write every attribute value into `dir`, one file per attribute name
///
/// With `output.apple_double` set, a `._<target>` sidecar is written too.
/// Everything is encoded before the first file is written.
pub async fn write_attributes(
    attrs: &FinderAttributes,
    dir: &Path,
    target: &str,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    let xattrs = attrs.to_xattrs()?;
    let sidecar = if config.output.apple_double {
        Some(attrs.to_apple_double()?)
    } else {
        None
    };

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(xattrs.len() + 1);
    for (name, data) in &xattrs {
        let path = dir.join(name);
        write_artifact(&path, data, config.output.format).await?;
        written.push(path);
    }

    if let Some(sidecar) = sidecar {
        let path = dir.join(format!("._{}", target));
        write_artifact(&path, &sidecar, config.output.format).await?;
        written.push(path);
    }

    Ok(written)
}
