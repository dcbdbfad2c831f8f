use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use fanfare::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "fanfare")]
#[command(about = "Achievement unlock celebrations - queued, tiered and paced")]
#[command(version)]
struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .fanfare/config.toml in the project)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay unlock events from a JSON-lines file and show the celebrations
    Replay {
        /// File with one unlock event per line, or `-` for stdin
        source: PathBuf,

        /// Delay between publishing two events, in milliseconds
        #[arg(long, default_value_t = 0)]
        stagger_ms: u64,
    },

    /// Show the tier table in effect
    Policy,

    /// Initialize a new .fanfare/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Replay { source, stagger_ms } => {
            let config = load_config(cli.config.as_deref(), &work_dir)?;
            cli::replay::replay_command(&config, &source, stagger_ms).await?;
        }
        Commands::Policy => {
            let config = load_config(cli.config.as_deref(), &work_dir)?;
            cli::policy::policy_command(&config)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(&work_dir, cli.config, force).await?;
        }
    }

    Ok(())
}

fn load_config(config_path: Option<&Path>, work_dir: &Path) -> Result<Config> {
    match config_path {
        Some(path) => Config::from_file(path),
        None => Config::from_dir(work_dir),
    }
}
