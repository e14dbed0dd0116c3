//! FinderInfo command

use crate::Config;
use crate::output::write_artifact;
use anyhow::Result;
use clap::Args;
use ffcore::{ExtendedFinderFlags, FinderFlags, FinderInfoBuilder, FourCharCode};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FinderInfoArgs {
    /// Four-char file type code, e.g. TEXT
    #[arg(long = "type")]
    pub type_code: Option<FourCharCode>,

    /// Four-char creator code, e.g. ttxt
    #[arg(long)]
    pub creator: Option<FourCharCode>,

    /// Raw Finder flags (decimal or 0x hex)
    #[arg(long, value_parser = super::parse_u16)]
    pub flags: Option<u16>,

    /// Raw extended Finder flags (decimal or 0x hex)
    #[arg(long, value_parser = super::parse_u16)]
    pub extended_flags: Option<u16>,

    /// Hide the file in the Finder
    #[arg(long)]
    pub invisible: bool,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,
}

impl FinderInfoArgs {
    pub fn to_builder(&self) -> FinderInfoBuilder {
        let mut flags = FinderFlags::from_bits_retain(self.flags.unwrap_or(0));
        if self.invisible {
            flags |= FinderFlags::IS_INVISIBLE;
        }

        let mut info = FinderInfoBuilder::new();
        info.set_flags(flags)
            .set_extended_flags(ExtendedFinderFlags::from_bits_retain(
                self.extended_flags.unwrap_or(0),
            ))
            .set_type_code(self.type_code.unwrap_or_default())
            .set_creator_code(self.creator.unwrap_or_default());
        info
    }
}

pub async fn run(config: &Config, args: FinderInfoArgs) -> Result<()> {
    let info = args.to_builder();
    tracing::debug!(
        "FinderInfo type '{}' creator '{}' flags {:#06x}",
        info.type_code(),
        info.creator_code(),
        info.flags().bits()
    );

    write_artifact(&args.output, &info.serialize(), config.output.format).await
}
