use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, history::HistoryArgs, optimize::OptimizeArgs};

mod generate;
mod history;
mod optimize;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Splits an amount into the fewest packs
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Lists past calculations stored in a history file
    History {
        #[command(flatten)]
        args: HistoryArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args)?,
        Commands::History { args } => history::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
