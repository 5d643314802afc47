//! Byte-buffer adapters: hex, base64, and file contents.

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::warn;

use crate::error::Result;
use crate::value::Value;

/// Adapts a byte buffer whose textual form is hex.
///
/// Surrounding whitespace is trimmed before decoding; the empty string is a
/// valid, empty buffer. Rendering is uppercase hex without separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytesHexValue {
    dst: Vec<u8>,
}

impl BytesHexValue {
    /// Creates the adapter with `default` pre-written to the destination.
    pub fn new(default: impl Into<Vec<u8>>) -> Self {
        BytesHexValue {
            dst: default.into(),
        }
    }

    /// The current destination bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.dst
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.dst
    }
}

impl Value for BytesHexValue {
    type Error = crate::Error;

    fn parse(&mut self, input: &str) -> Result<()> {
        self.dst = hex::decode(input.trim())?;
        Ok(())
    }

    fn render(&self) -> String {
        hex::encode_upper(&self.dst)
    }

    fn type_tag(&self) -> &'static str {
        "bytesHex"
    }
}

/// Adapts a byte buffer whose textual form is standard base64 (RFC 4648)
/// with required padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytesBase64Value {
    dst: Vec<u8>,
}

impl BytesBase64Value {
    /// Creates the adapter with `default` pre-written to the destination.
    pub fn new(default: impl Into<Vec<u8>>) -> Self {
        BytesBase64Value {
            dst: default.into(),
        }
    }

    /// The current destination bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.dst
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.dst
    }
}

impl Value for BytesBase64Value {
    type Error = crate::Error;

    fn parse(&mut self, input: &str) -> Result<()> {
        self.dst = STANDARD.decode(input.trim())?;
        Ok(())
    }

    fn render(&self) -> String {
        STANDARD.encode(&self.dst)
    }

    fn type_tag(&self) -> &'static str {
        "bytesBase64"
    }
}

/// Adapts a byte buffer filled from the contents of a file named on the
/// command line. Rendering returns the filename, not the bytes.
#[derive(Debug, Clone, Default)]
pub struct BytesFileValue {
    filename: String,
    dst: Vec<u8>,
}

impl BytesFileValue {
    pub fn new() -> Self {
        BytesFileValue::default()
    }

    /// Creates the adapter and reads `path` as the default contents under
    /// the tolerant-default policy: a failed read is swallowed so an absent
    /// default config file does not abort CLI startup, and a later parse may
    /// still succeed.
    pub fn with_default(path: &str) -> Self {
        let mut value = BytesFileValue {
            filename: path.to_string(),
            dst: Vec::new(),
        };
        if let Err(err) = value.read_current() {
            warn!(path, %err, "default file contents unavailable");
        }
        value
    }

    fn read_current(&mut self) -> Result<()> {
        self.dst = std::fs::read(&self.filename)?;
        Ok(())
    }

    /// The last filename handed to the adapter, parsed or defaulted.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The current destination bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.dst
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.dst
    }
}

impl Value for BytesFileValue {
    type Error = crate::Error;

    /// The filename is recorded before the read, so a failed read still
    /// shows up in `render`.
    fn parse(&mut self, input: &str) -> Result<()> {
        self.filename = input.to_string();
        self.read_current()
    }

    fn render(&self) -> String {
        self.filename.clone()
    }

    fn type_tag(&self) -> &'static str {
        "bytesFile"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use rstest::rstest;

    use super::*;
    use crate::Error;

    #[test]
    fn test_hex_default_preserved() {
        let value = BytesHexValue::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0], value.bytes());
    }

    #[test]
    fn test_hex_roundtrip() {
        let mut value = BytesHexValue::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
        value.parse("1234567890abcdef").unwrap();
        assert_eq!(&[0x12, 0x34, 0x56, 0x78, 0x90, 0xab, 0xcd, 0xef], value.bytes());
        assert_eq!("1234567890ABCDEF", value.render());
        assert_eq!("bytesHex", value.type_tag());
    }

    #[rstest(
        input,
        case::odd_single("0"),
        case::odd_triple("000"),
        case::not_hex("qq")
    )]
    fn test_hex_invalid(input: &str) {
        let mut value = BytesHexValue::new(vec![0xff]);
        assert!(matches!(value.parse(input), Err(Error::Hex(_))));
        // a failed parse leaves the destination untouched
        assert_eq!(&[0xff], value.bytes());
    }

    #[test]
    fn test_hex_empty_and_whitespace() {
        let mut value = BytesHexValue::new(vec![0xff]);
        value.parse("").unwrap();
        assert!(value.bytes().is_empty());
        value.parse("  cafe\n").unwrap();
        assert_eq!(&[0xca, 0xfe], value.bytes());
    }

    #[test]
    fn test_hex_last_write_wins() {
        let mut value = BytesHexValue::new(Vec::new());
        value.parse("01").unwrap();
        value.parse("02").unwrap();
        assert_eq!(&[0x02], value.bytes());
    }

    #[test]
    fn test_base64_roundtrip() {
        let mut value = BytesBase64Value::new(Vec::new());
        value.parse("AQ==").unwrap();
        assert_eq!(&[0x01], value.bytes());
        assert_eq!("AQ==", value.render());
        assert_eq!("bytesBase64", value.type_tag());
    }

    #[rstest(
        input,
        case::missing_padding("AQ"),
        case::not_base64("!!!!")
    )]
    fn test_base64_invalid(input: &str) {
        let mut value = BytesBase64Value::new(vec![0xff]);
        assert!(matches!(value.parse(input), Err(Error::Base64(_))));
        assert_eq!(&[0xff], value.bytes());
    }

    #[test]
    fn test_base64_empty() {
        let mut value = BytesBase64Value::new(vec![0xff]);
        value.parse("").unwrap();
        assert!(value.bytes().is_empty());
    }

    #[test]
    fn test_base64_error_isolation() {
        let mut value = BytesBase64Value::new(Vec::new());
        assert!(value.parse("AQ").is_err());
        value.parse("AQ==").unwrap();
        assert_eq!(&[0x01], value.bytes());
    }

    #[test]
    fn test_file_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"teststring").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let mut value = BytesFileValue::new();
        value.parse(&path).unwrap();
        assert_eq!(b"teststring", value.bytes());
        assert_eq!(path, value.render());
        assert_eq!("bytesFile", value.type_tag());
    }

    #[test]
    fn test_file_missing_records_filename() {
        let mut value = BytesFileValue::new();
        let err = value.parse("/nonexistent/flagval-test").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        // the attempted filename is adapter-internal bookkeeping and survives
        assert_eq!("/nonexistent/flagval-test", value.render());
        assert!(value.bytes().is_empty());
    }

    #[test]
    fn test_file_tolerant_default() {
        let value = BytesFileValue::with_default("/nonexistent/flagval-default");
        assert_eq!("/nonexistent/flagval-default", value.filename());
        assert!(value.bytes().is_empty());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fallback").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let value = BytesFileValue::with_default(&path);
        assert_eq!(b"fallback", value.bytes());
    }
}
