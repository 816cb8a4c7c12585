use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{calculate::CalculateArgs, cities::CitiesArgs, rates::RatesArgs};

mod calculate;
mod cities;
mod rates;
mod routing_args;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum freight for a trip
    #[command(visible_alias = "c")]
    Calculate {
        #[command(flatten)]
        args: CalculateArgs,
    },
    /// Print the ANTT rate table
    Rates {
        #[command(flatten)]
        args: RatesArgs,
    },
    /// Search the city catalogue
    Cities {
        #[command(flatten)]
        args: CitiesArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Calculate { args }) => calculate::run(args).await?,
        Some(Commands::Rates { args }) => rates::run(args)?,
        Some(Commands::Cities { args }) => cities::run(args)?,
        None => {}
    }

    Ok(())
}
