use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "deepwork", version, about = "Deep work helpers: affirmations, session plans, task ranking")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a personalized affirmation
    Affirm(commands::affirm::AffirmArgs),
    /// Plan work and break sessions for a time budget
    Plan(commands::plan::PlanArgs),
    /// Rank tasks by priority
    Rank(commands::rank::RankArgs),
    /// Suggest a break activity
    Break(commands::breaks::BreakArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Affirm(args) => commands::affirm::run(args),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Rank(args) => commands::rank::run(args),
        Commands::Break(args) => commands::breaks::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
