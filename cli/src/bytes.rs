use clap::Subcommand;

use flagval::{BytesBase64Value, BytesFileValue, BytesHexValue, Value};

use crate::error::Result;
use crate::utils::read_value;

#[derive(Subcommand)]
pub(crate) enum BytesCommands {
    /// Decode a hex argument
    Hex {
        /// Hex string, or `-` for stdin
        value: String,
    },
    /// Decode a standard base64 argument
    Base64 {
        /// Base64 string, or `-` for stdin
        value: String,
    },
    /// Read a file argument
    File {
        /// Path to the file
        path: String,
    },
}

pub(crate) fn execute(command: BytesCommands) -> Result<()> {
    match command {
        BytesCommands::Hex { value } => {
            let mut adapter = BytesHexValue::new(Vec::new());
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("length: {} bytes", adapter.bytes().len());
            println!("{}", adapter.render());
        }
        BytesCommands::Base64 { value } => {
            let mut adapter = BytesBase64Value::new(Vec::new());
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("length: {} bytes", adapter.bytes().len());
            println!("{}", adapter.render());
        }
        BytesCommands::File { path } => {
            let mut adapter = BytesFileValue::new();
            adapter.parse(&path)?;
            println!("type: {}", adapter.type_tag());
            println!("length: {} bytes", adapter.bytes().len());
            println!("{}", adapter.render());
        }
    }
    Ok(())
}
