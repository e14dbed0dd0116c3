//! Metadata manifests
//!
//! A manifest describes the Finder metadata for one file:
//!
//! ```json
//! {
//!   "target": "Report.txt",
//!   "finder_info": { "type_code": "TEXT", "creator_code": "ttxt", "flags": 1024 },
//!   "resources": [
//!     { "type": "icns", "id": -16455, "file": "report.icns" },
//!     { "type": "url ", "id": 256, "name": "link", "hex": "68747470" }
//!   ]
//! }
//! ```
//!
//! Relative payload paths resolve against the manifest's directory.

use anyhow::{Context, Result, bail};
use bytes::Bytes;
use ffcore::{ExtendedFinderFlags, FinderAttributes, FinderFlags, FourCharCode, ResourceRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Name of the file the metadata belongs to; used for the `._` sidecar
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub finder_info: Option<FinderInfoSpec>,
    #[serde(default)]
    pub resources: Vec<ResourceSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinderInfoSpec {
    #[serde(default)]
    pub type_code: FourCharCode,
    #[serde(default)]
    pub creator_code: FourCharCode,
    #[serde(default)]
    pub flags: FinderFlags,
    #[serde(default)]
    pub extended_flags: ExtendedFinderFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSpec {
    #[serde(rename = "type")]
    pub res_type: FourCharCode,
    pub id: i16,
    #[serde(default)]
    pub name: Option<String>,
    /// Payload read from a file
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Payload given inline as hex
    #[serde(default)]
    pub hex: Option<String>,
}

impl Manifest {
    /// Load a manifest from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest = serde_json::from_str(&content)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Build the file's attributes, reading payloads relative to `base_dir`
    pub async fn into_attributes(self, base_dir: &Path) -> Result<FinderAttributes> {
        let mut attrs = FinderAttributes::new();

        if let Some(spec) = self.finder_info {
            attrs
                .finder_info_mut()
                .set_type_code(spec.type_code)
                .set_creator_code(spec.creator_code)
                .set_flags(spec.flags)
                .set_extended_flags(spec.extended_flags);
        }

        let mut seen = HashSet::new();
        for spec in self.resources {
            if !seen.insert((spec.res_type, spec.id)) {
                tracing::warn!("Duplicate resource '{}' id {} in manifest", spec.res_type, spec.id);
            }

            let data = spec.payload(base_dir).await?;
            let record = ResourceRecord::new(spec.res_type, spec.id, spec.name.as_deref(), data)
                .with_context(|| format!("Invalid resource '{}' id {}", spec.res_type, spec.id))?;
            attrs.resource_fork_mut().add_record(record);
        }

        Ok(attrs)
    }
}

impl ResourceSpec {
    async fn payload(&self, base_dir: &Path) -> Result<Bytes> {
        match (&self.file, &self.hex) {
            (Some(file), None) => {
                let path = base_dir.join(file);
                let data = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("Failed to read resource data {}", path.display()))?;
                Ok(Bytes::from(data))
            }
            (None, Some(text)) => {
                let data = hex::decode(text.trim())
                    .with_context(|| format!("Invalid hex for resource '{}'", self.res_type))?;
                Ok(Bytes::from(data))
            }
            (None, None) => Ok(Bytes::new()),
            (Some(_), Some(_)) => bail!(
                "Resource '{}' id {} has both file and hex data",
                self.res_type,
                self.id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let json = r#"{
            "finder_info": { "type_code": "TEXT", "flags": 16384 },
            "resources": [
                { "type": "url ", "id": 256, "name": "link", "hex": "6869" }
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();

        let info = manifest.finder_info.unwrap();
        assert_eq!(info.type_code, FourCharCode::TEXT);
        assert!(info.creator_code.is_zero());
        assert_eq!(info.flags, FinderFlags::IS_INVISIBLE);
        assert_eq!(manifest.resources[0].res_type, FourCharCode::URL);
        assert_eq!(manifest.target, None);
    }

    #[test]
    fn test_bad_type_code_rejected() {
        let json = r#"{ "resources": [ { "type": "ic", "id": 1 } ] }"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());
    }
}
