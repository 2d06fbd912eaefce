//! Input reading
//!
//! The whole file is read into memory as UTF-8. Open/read failures are
//! classified so each gets its own message.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::cli::{Error, Result, Tool};

/// Read the input file for `tool`
pub fn read_input(path: &Path, tool: Tool) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read input");
            Ok(text)
        }
        Err(e) => Err(match e.kind() {
            ErrorKind::NotFound => Error::NotFound {
                path: path.display().to_string(),
                tool,
            },
            ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.display().to_string(),
            },
            _ => Error::Read(e),
        }),
    }
}
