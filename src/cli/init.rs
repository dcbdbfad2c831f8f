//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::info;

use fanfare::config::CONFIG_PATH;

/// Default configuration content for fanfare init
pub const DEFAULT_CONFIG: &str = r#"# fanfare Configuration
# =====================
#
# Celebrations are shown one at a time. Each tier holds the display slot for
# its duration, then the slot stays empty for `gap_ms` before the next one.
# Tier 1 unlocks are never shown; tier 5 unlocks jump the queue.

# ============================================================================
# CELEBRATION - Pacing
# ============================================================================
#
# Available options:
#   gap_ms   - Pause between two celebrations (default: 300)
#   tier2_ms - Light celebration duration (default: 3000)
#   tier3_ms - Standard celebration duration (default: 4000)
#   tier4_ms - Major celebration duration (default: 5000)
#   tier5_ms - Epic celebration duration (default: 6000)

[celebration]
gap_ms = 300
tier2_ms = 3000
tier3_ms = 4000
tier4_ms = 5000
tier5_ms = 6000

# ============================================================================
# SOUND - Played when a tier 3+ celebration starts
# ============================================================================
#
# Sound failures never hold up the queue.

[sound]
enabled = true
# Ring the terminal bell (more rings for higher tiers)
bell = true
"#;

/// Write a default config file
pub async fn init_command(work_dir: &Path, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| work_dir.join(CONFIG_PATH));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!(path = %config_path.display(), "Config written");
    println!("Created: {}", config_path.display());

    Ok(())
}
