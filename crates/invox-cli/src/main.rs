//! CLI for parsing dictated invoice commands.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, parse, triggers};

/// invox - turn dictated invoice commands into structured updates
#[derive(Parser)]
#[command(name = "invox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single transcript
    Parse(parse::ParseArgs),

    /// Parse a file of transcripts, one per line
    Batch(batch::BatchArgs),

    /// List the trigger phrases the parser understands
    Triggers(triggers::TriggersArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Parse(args) => parse::run(args),
        Commands::Batch(args) => batch::run(args),
        Commands::Triggers(args) => triggers::run(args),
    }
}
