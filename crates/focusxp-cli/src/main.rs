use clap::{Parser, Subcommand};
use focusxp_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "focusxp", version, about = "FocusXP deep-work tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Focus sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Capture and triage stray thoughts
    Capture {
        #[command(subcommand)]
        action: commands::capture::CaptureAction,
    },
    /// Daily objective
    Objective {
        #[command(subcommand)]
        action: commands::objective::ObjectiveAction,
    },
    /// Experience points
    Xp {
        #[command(subcommand)]
        action: commands::xp::XpAction,
    },
    /// Consecutive-day streaks
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Achievement catalogue
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Session statistics
    Stats,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so JSON on stdout stays parseable.
///
/// `FOCUSXP_LOG` wins over the configured `logging.filter`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("FOCUSXP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(Config::load_or_default().logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Project { action } => commands::project::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Capture { action } => commands::capture::run(action),
        Commands::Objective { action } => commands::objective::run(action),
        Commands::Xp { action } => commands::xp::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Stats => commands::stats::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
