use clap::{Parser, Subcommand};

mod bytes;
mod cert;
mod error;
mod key;
mod utils;

use bytes::BytesCommands;
use cert::CertCommands;
use error::Result;
use key::KeyCommands;

#[derive(Parser)]
#[command(name = "flagval")]
#[command(about = "Inspect command-line values for keys and certificates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Byte buffer values
    Bytes {
        #[command(subcommand)]
        command: BytesCommands,
    },
    /// Certificate values
    Cert {
        #[command(subcommand)]
        command: CertCommands,
    },
    /// Key values
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bytes { command } => bytes::execute(command)?,
        Commands::Cert { command } => cert::execute(command)?,
        Commands::Key { command } => key::execute(command)?,
    }

    Ok(())
}
