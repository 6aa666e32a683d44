//! Program-image loader.
//!
//! A program image is a flat sequence of little-endian 32-bit instruction
//! words, loaded at instruction-memory offset zero.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Errors raised while loading a program image.
#[derive(Debug)]
pub enum LoadError {
    /// The image file could not be read.
    Io(io::Error),
    /// The image length is not a multiple of the 4-byte instruction size.
    TruncatedImage { len: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read program image: {}", e),
            LoadError::TruncatedImage { len } => {
                write!(
                    f,
                    "program image length {} is not a multiple of 4 bytes",
                    len
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::TruncatedImage { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// Assembles raw image bytes into instruction words.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, LoadError> {
    if bytes.len() % 4 != 0 {
        return Err(LoadError::TruncatedImage { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Reads a program image from disk.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, LoadError> {
    let bytes = fs::read(path)?;
    words_from_bytes(&bytes)
}
