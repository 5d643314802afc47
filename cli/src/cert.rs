use clap::Subcommand;

use flagval::{CertPoolValue, CertificateValue, CertificatesValue, TlsCertificateValue, Value};

use crate::error::Result;
use crate::utils::read_value;

#[derive(Subcommand)]
pub(crate) enum CertCommands {
    /// Decode a single PEM certificate
    Single {
        /// PEM blob (literal `\n` accepted), or `-` for stdin
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a concatenated PEM certificate chain
    Chain {
        /// PEM blob, or `-` for stdin
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode certificates into a deduplicating pool
    Pool {
        /// PEM blob, or `-` for stdin
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a private key followed by its certificate chain
    Identity {
        /// PEM blob, or `-` for stdin
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

pub(crate) fn execute(command: CertCommands) -> Result<()> {
    match command {
        CertCommands::Single { value } => {
            let mut adapter = CertificateValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("{}", adapter.render());
        }
        CertCommands::Chain { value } => {
            let mut adapter = CertificatesValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("certificates: {}", adapter.certificates().len());
            println!("{}", adapter.render());
        }
        CertCommands::Pool { value } => {
            let mut adapter = CertPoolValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("pool size: {}", adapter.pool().len());
        }
        CertCommands::Identity { value } => {
            let mut adapter = TlsCertificateValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            if let Some(identity) = adapter.identity() {
                println!("chain length: {}", identity.chain().len());
            }
            println!("key: {}", adapter.render());
        }
    }
    Ok(())
}
