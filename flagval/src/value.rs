//! The adapter contract shared by every command-line value in this crate.
//!
//! An implementer owns its destination and exposes three operations to the
//! host argument parser:
//!
//! 1. [`Value::parse`] — validate and decode a textual argument, mutating
//!    the destination only on success
//! 2. [`Value::render`] — the textual form of the current destination
//! 3. [`Value::type_tag`] — a short stable identifier for help text
//!
//! Repeated `parse` calls are last-write-wins; no ordering is promised
//! across adapters. A failed `parse` leaves the destination observationally
//! unchanged (the file adapter's remembered filename is the one documented
//! exception).
//!
//! # Example
//!
//! ```
//! use flagval::{BytesHexValue, Value};
//!
//! let mut bytes = BytesHexValue::new([0x00]);
//! bytes.parse("cafe").unwrap();
//! assert_eq!(bytes.bytes(), [0xca, 0xfe]);
//! assert_eq!(bytes.render(), "CAFE");
//! assert_eq!(bytes.type_tag(), "bytesHex");
//! ```

/// Fixed rendering for secret-bearing destinations.
pub(crate) const REDACTED: &str = "<redacted>";

/// A typed command-line value.
pub trait Value {
    /// The error type returned when parsing fails.
    type Error;

    /// Decodes `input` into the owned destination.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not valid in the adapter's
    /// declared encoding; the destination keeps its previous contents.
    fn parse(&mut self, input: &str) -> Result<(), Self::Error>;

    /// The textual representation of the current destination. Secret-bearing
    /// adapters render the constant `<redacted>` instead.
    fn render(&self) -> String;

    /// A short stable identifier consumed by help text.
    fn type_tag(&self) -> &'static str;
}
