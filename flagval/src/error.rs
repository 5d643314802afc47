use thiserror::Error;

/// Errors surfaced by [`Value::parse`](crate::Value::parse).
///
/// Decoder errors from the underlying format crates propagate unchanged;
/// the dedicated variants cover the structural conditions the adapters
/// check themselves.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("pem decode: {0}")]
    Pem(#[from] pem::Error),

    /// No PEM block was found, or a block carried an unexpected label
    #[error("failed to find a suitable pem block type")]
    NoSuitablePemBlock,

    /// A TLS identity argument did not start with a private key block
    #[error("missing a leading private key pem block")]
    MissingPrivateKey,

    /// A TLS identity argument started with something other than a private key
    #[error("expected a private key as the first pem block")]
    UnexpectedLeadingBlock,

    /// A TLS identity argument carried no certificate chain
    #[error("missing certificate pem block")]
    MissingCertificate,

    /// A hex scalar did not match the declared curve size
    #[error("invalid length, expected {expected} bits")]
    InvalidKeyLength { expected: usize },

    /// A hex point was not the uncompressed SEC1 form
    #[error("invalid uncompressed point encoding")]
    InvalidPointEncoding,

    /// A SubjectPublicKeyInfo carried an algorithm no adapter handles
    #[error("unknown type of public key")]
    UnknownPublicKeyType,

    /// A PKCS#8 blob carried an algorithm no adapter handles
    #[error("unknown type of private key")]
    UnknownPrivateKeyType,

    /// An EC key referenced a named curve outside the supported set
    #[error("unsupported named curve")]
    UnsupportedCurve,

    /// Bytes remained after a complete X.509 certificate
    #[error("trailing data after certificate")]
    TrailingData,

    #[error("x509 parse: {0}")]
    X509(#[from] x509_parser::error::X509Error),

    #[error("der decode: {0}")]
    Der(#[from] spki::der::Error),

    #[error("spki decode: {0}")]
    Spki(#[from] spki::Error),

    #[error("pkcs#1 decode: {0}")]
    Pkcs1(#[from] pkcs1::Error),

    #[error("pkcs#8 decode: {0}")]
    Pkcs8(#[from] pkcs8::Error),

    #[error("elliptic curve: {0}")]
    EllipticCurve(#[from] elliptic_curve::Error),

    #[error("sec1 decode: {0}")]
    Sec1(#[from] sec1::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
