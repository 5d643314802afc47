//! Command-line argument adapters for cryptographic material.
//!
//! Each adapter owns a destination value and implements the [`Value`]
//! contract: [`Value::parse`] validates and decodes a textual argument into
//! the destination, [`Value::render`] prints the current destination (or
//! `<redacted>` for secrets), and [`Value::type_tag`] names the adapter for
//! help text. A host argument parser registers the adapter and calls `parse`
//! once per occurrence of the flag; the caller reads the destination through
//! the adapter's typed accessor afterwards.
//!
//! Adapters exist for raw byte buffers (hex, base64, file contents), X.509
//! certificates (single, chain, pool), TLS identities (private key plus
//! certificate chain), and ECDSA/RSA key material.

pub mod bytes;
pub mod cert;
pub mod ecdsa;
pub mod error;
pub mod rsa;
pub mod spki;
pub mod tls;
pub mod value;

pub use self::bytes::{BytesBase64Value, BytesFileValue, BytesHexValue};
pub use self::cert::{CertPool, CertPoolValue, CertificateValue, CertificatesValue};
pub use self::ecdsa::{
    EcdsaPrivateKey, EcdsaPrivateKeyHexValue, EcdsaPrivateKeyPemValue, EcdsaPublicKey,
    EcdsaPublicKeyHexValue, EcdsaPublicKeyPemValue,
};
pub use self::error::{Error, Result};
pub use self::rsa::{RsaPrivateKeyValue, RsaPublicKeyValue};
pub use self::spki::{NamedCurve, PublicKey};
pub use self::tls::{TlsCertificateValue, TlsIdentity};
pub use self::value::Value;

/// Prepares a PEM argument for decoding: surrounding whitespace is trimmed,
/// then literal two-character `\n` sequences are rewritten to real newlines
/// so a whole PEM blob can ride in a single shell argument. Byte adapters
/// never apply this.
pub(crate) fn normalize_pem_input(input: &str) -> String {
    input.trim().replace("\\n", "\n")
}

/// Parses the first PEM block of an already-normalized argument, mapping the
/// no-block case onto the suitable-block error.
pub(crate) fn parse_single_block(normalized: &str) -> Result<pem::Block> {
    normalized.parse::<pem::Block>().map_err(|err| match err {
        pem::Error::MissingBeginBoundary => Error::NoSuitablePemBlock,
        other => Error::Pem(other),
    })
}
