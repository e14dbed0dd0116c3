//! Finder metadata tool (fftool)

use anyhow::Result;
use clap::Parser;
use fftool::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    cli::run(Cli::parse()).await
}
