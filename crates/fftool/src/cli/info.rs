//! Configuration info command

use crate::Config;
use anyhow::Result;

pub async fn run(config: &Config) -> Result<()> {
    println!("Effective Configuration");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Output format:   {:?}", config.output.format);
    println!("AppleDouble:     {}", if config.output.apple_double { "enabled" } else { "disabled" });
    println!();
    println!("Icon resource:   {}", config.icon.resource_id);
    println!("Set icon flag:   {}", if config.icon.set_custom_icon_flag { "yes" } else { "no" });
    println!();
    println!("Log level:       {}", config.logging.level);

    Ok(())
}
