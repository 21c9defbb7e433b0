use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "matinale-cli", version, about = "Matinale CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Routine timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Routine catalog management
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Affirmation collection
    Affirmation {
        #[command(subcommand)]
        action: commands::affirmation::AffirmationAction,
    },
    /// Quality collection
    Quality {
        #[command(subcommand)]
        action: commands::quality::QualityAction,
    },
    /// Morning flow content (moods, needs, citations)
    Morning {
        #[command(subcommand)]
        action: commands::morning::MorningAction,
    },
    /// Morning alarm settings
    Alarm {
        #[command(subcommand)]
        action: commands::alarm::AlarmAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Data management
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Routine { action } => commands::routine::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Affirmation { action } => commands::affirmation::run(action),
        Commands::Quality { action } => commands::quality::run(action),
        Commands::Morning { action } => commands::morning::run(action),
        Commands::Alarm { action } => commands::alarm::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
