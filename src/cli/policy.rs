//! Policy command implementation

use anyhow::Result;

use fanfare::Tier;
use fanfare::celebration::{RenderMode, sound};
use fanfare::config::Config;

/// Print the tier table in effect
pub fn policy_command(config: &Config) -> Result<()> {
    let table = config.celebration.tier_table();

    println!("Tier  Mode      Shown  Duration  Sound");
    for tier in Tier::all() {
        let policy = table.policy_for(tier);
        let duration = if policy.renders_visually {
            format!("{}ms", policy.duration.as_millis())
        } else {
            "-".to_string()
        };
        println!(
            "{:<5} {:<9} {:<6} {:<9} {}",
            tier.get(),
            RenderMode::for_tier(tier),
            if policy.renders_visually { "yes" } else { "no" },
            duration,
            if sound::has_sound(tier) && config.sound.enabled { "yes" } else { "no" },
        );
    }
    println!("\nGap between celebrations: {}ms", config.celebration.gap_ms);

    Ok(())
}
