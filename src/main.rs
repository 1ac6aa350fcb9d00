use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "pointforge")]
#[command(about = "Points, levels, ranks and rewards for your player profile")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to .pointforge/config.toml, then ~/.pointforge/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile database to use instead of the configured one
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, level, rank and streak
    Status,

    /// Write a default config file (~/.pointforge/config.toml or --config)
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Record playing a game
    Play {
        /// Stable game id
        game_id: String,
        /// Display name
        game_name: String,
    },

    /// Record using a utility
    Utility { utility_id: String },

    /// Record visiting a page
    Visit { page_id: String },

    /// List milestones and which ones are achieved
    Milestones,

    /// Browse the shop
    Shop {
        /// Only show this category (visual, convenience, discovery, profile, premium)
        #[arg(long)]
        category: Option<String>,
        /// Only show this tier (starter, medium, advanced, ultimate)
        #[arg(long)]
        tier: Option<String>,
    },

    /// Buy a shop item
    Buy { item_id: String },

    /// Export the profile as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Replace the profile with an exported one
    Import { file: PathBuf },

    /// Wipe all progress and purchases
    Reset {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Status);
    if let Commands::Init { force } = command {
        return cli::init::init_command(cli.config, force);
    }

    let config = cli::load_config(cli.config.as_deref())?;
    let mut store = cli::open_store(&config, cli.profile.as_deref())?;

    match command {
        Commands::Init { .. } => unreachable!("handled before the profile is opened"),
        Commands::Status => cli::status::status_command(&mut store)?,
        Commands::Play { game_id, game_name } => {
            cli::activity::play_command(&mut store, &game_id, &game_name)?
        }
        Commands::Utility { utility_id } => cli::activity::utility_command(&mut store, &utility_id)?,
        Commands::Visit { page_id } => cli::activity::visit_command(&mut store, &page_id)?,
        Commands::Milestones => cli::status::milestones_command(&mut store)?,
        Commands::Shop { category, tier } => {
            cli::shop::shop_command(&mut store, category.as_deref(), tier.as_deref())?
        }
        Commands::Buy { item_id } => cli::shop::buy_command(&mut store, &item_id)?,
        Commands::Export { out } => cli::profile::export_command(&mut store, out.as_deref())?,
        Commands::Import { file } => cli::profile::import_command(&mut store, &file)?,
        Commands::Reset { yes } => cli::profile::reset_command(&mut store, yes)?,
    }

    Ok(())
}
