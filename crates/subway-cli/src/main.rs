mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use subway_cli::output::OutputFormat;

use crate::commands::{handle_lines_command, handle_path_command};

#[derive(Parser, Debug)]
#[command(author, version, about = "Subway network path finder")]
struct Cli {
    /// Network definition file, or a directory containing `network.json`.
    /// Falls back to `SUBWAY_NETWORK`, then the platform data directory.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest path between two station names.
    Path {
        /// Departure station name.
        #[arg(long = "from")]
        from: String,
        /// Arrival station name.
        #[arg(long = "to")]
        to: String,
    },
    /// List the lines of the network and their stations.
    Lines,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Path { from, to } => {
            handle_path_command(cli.network.as_deref(), cli.format, &from, &to)
        }
        Command::Lines => handle_lines_command(cli.network.as_deref(), cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
