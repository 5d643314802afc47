use std::io::{self, Read};

use crate::error::Result;

/// Resolve a VALUE argument: `-` reads the whole of stdin, anything else is
/// taken literally.
pub(crate) fn read_value(value: &str) -> Result<String> {
    if value == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(value.to_string())
    }
}
