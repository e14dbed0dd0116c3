//! Integration tests for command dispatch

use clap::Parser;
use fftool::cli::{self, Cli};
use fftool::Config;
use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fftool_cli_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

#[tokio::test]
async fn test_init_force_replaces_broken_config() {
    let dir = scratch_dir("init_force");
    let config_path = dir.join("fftool.json");
    std::fs::write(&config_path, "{ broken").unwrap();

    let args = Cli::try_parse_from([
        "fftool",
        "--config",
        config_path.to_str().unwrap(),
        "init",
        "--force",
    ])
    .unwrap();
    cli::run(args).await.unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.icon.resource_id, -16455);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_broken_config_fails_other_commands() {
    let dir = scratch_dir("broken");
    let config_path = dir.join("fftool.json");
    std::fs::write(&config_path, "{ broken").unwrap();

    let args = Cli::try_parse_from(["fftool", "--config", config_path.to_str().unwrap(), "info"])
        .unwrap();
    assert!(cli::run(args).await.is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_icon_sidecar_named_for_target() {
    let dir = scratch_dir("icon_target");
    let config_path = dir.join("fftool.json");
    let mut config = Config::default();
    config.output.apple_double = true;
    config.save(&config_path).unwrap();

    let icns = dir.join("badge.icns");
    std::fs::write(&icns, vec![0x11u8; 8]).unwrap();
    let out = dir.join("out");

    let args = Cli::try_parse_from([
        "fftool",
        "--config",
        config_path.to_str().unwrap(),
        "icon",
        icns.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--target",
        "Report.txt",
    ])
    .unwrap();
    cli::run(args).await.unwrap();

    assert!(out.join("._Report.txt").exists());
    assert!(!out.join("._badge").exists());
    assert!(out.join("com.apple.ResourceFork").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
