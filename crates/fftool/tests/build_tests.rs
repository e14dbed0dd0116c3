//! Integration tests for manifest builds

use fftool::output::write_attributes;
use fftool::{Config, Manifest, OutputFormat};
use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fftool_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

fn be32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(data[offset..offset + 4].try_into().unwrap())
}

#[tokio::test]
async fn test_build_from_manifest() {
    let dir = scratch_dir("manifest");
    std::fs::write(dir.join("icon.icns"), vec![0x42u8; 17]).unwrap();
    std::fs::write(
        dir.join("meta.json"),
        r#"{
            "target": "Report.txt",
            "finder_info": { "type_code": "TEXT", "creator_code": "ttxt" },
            "resources": [
                { "type": "icns", "id": -16455, "file": "icon.icns" },
                { "type": "url ", "id": 256, "name": "link", "hex": "68747470" }
            ]
        }"#,
    )
    .unwrap();

    let manifest = Manifest::load(dir.join("meta.json")).await.unwrap();
    let target = manifest.target.clone().unwrap();
    let attrs = manifest.into_attributes(&dir).await.unwrap();

    let out = dir.join("out");
    let written = write_attributes(&attrs, &out, &target, &Config::default())
        .await
        .unwrap();
    assert_eq!(written.len(), 2);

    let info = std::fs::read(out.join("com.apple.FinderInfo")).unwrap();
    assert_eq!(info.len(), 32);
    assert_eq!(&info[0..8], b"TEXTttxt");

    let fork = std::fs::read(out.join("com.apple.ResourceFork")).unwrap();
    assert_eq!(be32(&fork, 0), 16);
    // icns entry: 4 + 17, url entry: 4 + 4
    assert_eq!(be32(&fork, 8), 29);
    assert_eq!(be32(&fork, 16), 17);
    assert_eq!(&fork[20..37], &[0x42u8; 17]);
    assert_eq!(be32(&fork, 37), 4);
    assert_eq!(&fork[41..45], b"http");
    assert!(fork.ends_with(b"\x04link"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_hex_output_with_sidecar() {
    let dir = scratch_dir("sidecar");
    let manifest: Manifest = serde_json::from_str(
        r#"{ "target": "notes", "finder_info": { "flags": 16384 } }"#,
    )
    .unwrap();
    let attrs = manifest.into_attributes(&dir).await.unwrap();

    let mut config = Config::default();
    config.output.format = OutputFormat::Hex;
    config.output.apple_double = true;

    let written = write_attributes(&attrs, &dir, "notes", &config).await.unwrap();
    assert_eq!(written, vec![dir.join("com.apple.FinderInfo"), dir.join("._notes")]);

    let info = std::fs::read_to_string(dir.join("com.apple.FinderInfo")).unwrap();
    assert_eq!(info.trim_end(), format!("{}4000{}", "0".repeat(16), "0".repeat(44)));

    let sidecar = hex::decode(std::fs::read_to_string(dir.join("._notes")).unwrap().trim()).unwrap();
    assert_eq!(be32(&sidecar, 0), 0x0005_1607);
    assert_eq!(sidecar.len(), 26 + 12 + 32);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_overlong_name_fails() {
    let dir = scratch_dir("long_name");
    let manifest = Manifest {
        resources: vec![serde_json::from_value(serde_json::json!({
            "type": "TEXT",
            "id": 1,
            "name": "x".repeat(256),
        }))
        .unwrap()],
        ..Default::default()
    };

    let err = manifest.into_attributes(&dir).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Resource name too long"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_missing_payload_file() {
    let dir = scratch_dir("missing");
    let manifest: Manifest = serde_json::from_str(
        r#"{ "resources": [ { "type": "icns", "id": 1, "file": "nope.icns" } ] }"#,
    )
    .unwrap();

    assert!(manifest.into_attributes(&dir).await.is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
