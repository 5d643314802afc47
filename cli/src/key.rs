use clap::{Subcommand, ValueEnum};

use flagval::{
    EcdsaPrivateKeyHexValue, EcdsaPrivateKeyPemValue, EcdsaPublicKeyHexValue,
    EcdsaPublicKeyPemValue, NamedCurve, RsaPrivateKeyValue, RsaPublicKeyValue, Value,
};

use crate::error::Result;
use crate::utils::read_value;

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Curve {
    P256,
    P384,
}

impl From<Curve> for NamedCurve {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::P256 => NamedCurve::P256,
            Curve::P384 => NamedCurve::P384,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum KeyCommands {
    /// Decode a PKCS#1 RSA private key PEM
    RsaPrivate {
        /// PEM blob (literal `\n` accepted), or `-` for stdin
        value: String,
    },
    /// Decode an RSA public key PEM (SubjectPublicKeyInfo)
    RsaPublic {
        /// PEM blob, or `-` for stdin
        value: String,
    },
    /// Decode an ECDSA private key PEM (PKCS#8 or SEC1)
    EcPrivate {
        /// PEM blob, or `-` for stdin
        value: String,
    },
    /// Decode an ECDSA public key PEM (SubjectPublicKeyInfo)
    EcPublic {
        /// PEM blob, or `-` for stdin
        value: String,
    },
    /// Decode a raw hex scalar on an explicit curve
    EcScalar {
        #[arg(value_enum)]
        curve: Curve,
        /// Hex scalar of exactly the curve bit size
        value: String,
    },
    /// Decode a raw hex uncompressed point on an explicit curve
    EcPoint {
        #[arg(value_enum)]
        curve: Curve,
        /// Hex `04 || X || Y` point
        value: String,
    },
}

pub(crate) fn execute(command: KeyCommands) -> Result<()> {
    match command {
        KeyCommands::RsaPrivate { value } => {
            let mut adapter = RsaPrivateKeyValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("{}", adapter.render());
        }
        KeyCommands::RsaPublic { value } => {
            let mut adapter = RsaPublicKeyValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("{}", adapter.render());
        }
        KeyCommands::EcPrivate { value } => {
            let mut adapter = EcdsaPrivateKeyPemValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            if let Some(key) = adapter.key() {
                println!("curve: {}", key.curve());
            }
            println!("{}", adapter.render());
        }
        KeyCommands::EcPublic { value } => {
            let mut adapter = EcdsaPublicKeyPemValue::new();
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            if let Some(key) = adapter.key() {
                println!("curve: {}", key.curve());
            }
            println!("{}", adapter.render());
        }
        KeyCommands::EcScalar { curve, value } => {
            let mut adapter = EcdsaPrivateKeyHexValue::new(curve.into());
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("curve: {}", adapter.curve());
            println!("{}", adapter.render());
        }
        KeyCommands::EcPoint { curve, value } => {
            let mut adapter = EcdsaPublicKeyHexValue::new(curve.into());
            adapter.parse(&read_value(&value)?)?;
            println!("type: {}", adapter.type_tag());
            println!("curve: {}", adapter.curve());
            println!("{}", adapter.render());
        }
    }
    Ok(())
}
