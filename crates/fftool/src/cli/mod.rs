//! Command implementations

pub mod build;
pub mod finder_info;
pub mod icon;
pub mod info;
pub mod init;

use crate::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fftool")]
#[command(about = "Finder metadata encoder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "fftool.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Write a FinderInfo record
    FinderInfo(finder_info::FinderInfoArgs),

    /// Write FinderInfo and resource fork attaching a custom icon
    Icon {
        /// Icon family (.icns) file
        icns: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Resource id for the icon
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i16>,

        /// Name of the decorated file, used for the `._` sidecar
        #[arg(long)]
        target: Option<String>,
    },

    /// Build metadata from a JSON manifest
    Build {
        /// Manifest file
        manifest: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the effective configuration
    Info,

    /// Show version information
    Version,
}

/// Install the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .try_init();
}

/// Run a parsed command line
///
/// `init` never reads the existing config, so it can replace a broken one.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            init_tracing("info");
            init::run(&cli.config, force).await
        }
        command => {
            let config = Config::load_or_default(&cli.config)?;
            init_tracing(&config.logging.level);
            run_command(&cli.config, &config, command).await
        }
    }
}

async fn run_command(config_path: &str, config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Init { force } => init::run(config_path, force).await,
        Commands::FinderInfo(args) => finder_info::run(config, args).await,
        Commands::Icon {
            icns,
            output,
            id,
            target,
        } => icon::run(config, icns, output, id, target).await,
        Commands::Build { manifest, output } => build::run(config, manifest, output).await,
        Commands::Info => info::run(config).await,
        Commands::Version => {
            println!("fftool version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Parse a 16-bit value given in decimal or `0x` hex
pub fn parse_u16(s: &str) -> Result<u16, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u16() {
        assert_eq!(parse_u16("1024").unwrap(), 1024);
        assert_eq!(parse_u16("0x4000").unwrap(), 0x4000);
        assert_eq!(parse_u16("0XFFFF").unwrap(), 0xFFFF);
        assert!(parse_u16("0x10000").is_err());
        assert!(parse_u16("abc").is_err());
    }
}
