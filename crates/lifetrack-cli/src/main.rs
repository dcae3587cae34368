use clap::{Parser, Subcommand};
use lifetrack_core::Config;

mod commands;
mod logging;
mod notifier;

#[derive(Parser)]
#[command(name = "lifetrack", version, about = "lifetrack CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Short- and long-term goals
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Workout targets and daily records
    Fitness {
        #[command(subcommand)]
        action: commands::fitness::FitnessAction,
    },
    /// Journal entries and grammar check
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Social media usage and screen-time limit
    Social {
        #[command(subcommand)]
        action: commands::social::SocialAction,
    },
    /// Study logs and plans
    Academic {
        #[command(subcommand)]
        action: commands::academic::AcademicAction,
    },
    /// Progress metrics and motivation
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },
    /// Screen-time and study reminders
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.log.level);
    if let Err(e) = &loaded {
        tracing::warn!("using default configuration: {e}");
    }

    let result = match cli.command {
        Commands::Goal { action } => commands::goal::run(action, &config),
        Commands::Fitness { action } => commands::fitness::run(action, &config),
        Commands::Journal { action } => commands::journal::run(action, &config),
        Commands::Social { action } => commands::social::run(action, &config),
        Commands::Academic { action } => commands::academic::run(action, &config),
        Commands::Dashboard { action } => commands::dashboard::run(action, &config),
        Commands::Remind { action } => commands::remind::run(action, config),
        Commands::Config { action } => commands::config::run(action),
        Commands::Theme { action } => commands::theme::run(action, &config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
