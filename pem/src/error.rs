use base64::DecodeError;
use thiserror::Error;

/// Errors produced while scanning or decoding PEM data.
///
/// Scanning follows RFC 7468: matching encapsulation boundaries, a non-empty
/// base64 body, and padding only on the final body lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN X-----` boundary was found
    #[error("missing a begin encapsulation boundary")]
    MissingBeginBoundary,

    /// A block was opened but its `-----END X-----` boundary never came
    #[error("missing an end encapsulation boundary")]
    MissingEndBoundary,

    /// A block carried no base64 body at all
    #[error("missing block data")]
    MissingData,

    /// The label in a boundary is not one this crate knows
    #[error("unknown label")]
    UnknownLabel,

    /// The BEGIN and END labels of one block disagree
    #[error("begin and end labels do not match")]
    LabelMismatch,

    /// A blank line appeared inside a block body
    #[error("blank line inside a block body")]
    BlankLine,

    /// A body line followed the base64 padding
    #[error("data after base64 padding")]
    DataAfterPadding,

    /// The collected body is not valid base64
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
