//! Loading source files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{DriverError, Result};

/// Required suffix of PL/0 source paths.
pub const EXTENSION: &str = ".pl0";

/// Checks that `path` ends in the literal suffix `.pl0`.
pub fn check_extension(path: &Path) -> Result<()> {
    if path.to_string_lossy().ends_with(EXTENSION) {
        Ok(())
    } else {
        Err(DriverError::FileExtension(path.to_path_buf()))
    }
}

/// Reads a whole `.pl0` file into memory.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. Outside of
/// comments such bytes are rejected by the lexer either way.
pub fn read_source(path: &Path) -> Result<String> {
    check_extension(path)?;

    let mut file = File::open(path).map_err(|source| DriverError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| DriverError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded source");

    let source = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), "source is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        },
    };
    Ok(source)
}
