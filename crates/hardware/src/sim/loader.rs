//! Program Image Loader.
//!
//! This module reads program and data images from disk. It performs:
//! 1. **Hex parsing:** One 32-bit word per line, optional `0x` prefix, `#` and `//`
//!    comments, blank lines ignored. This is the format hardware test benches use
//!    to initialise instruction memories.
//! 2. **Binary loading:** Raw big-endian words.
//!
//! Loaded words are placed by [`Simulator::load_program`](crate::sim::Simulator::load_program)
//! and [`Simulator::load_data`](crate::sim::Simulator::load_data).

use std::fs;
use std::path::Path;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::error::{SimError, SimResult};

/// Reads a file, mapping failures to [`SimError::Io`].
fn read(path: &Path) -> SimResult<Vec<u8>> {
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a hex image.
///
/// # Arguments
///
/// * `text` - Image text.
///
/// # Returns
///
/// The words in file order.
///
/// # Errors
///
/// Returns [`SimError::MalformedHex`] for a line that is not a single 32-bit hex word.
///
/// # Examples
///
/// ```
/// use mips_core::sim::loader::parse_hex;
///
/// let words = parse_hex("20010005  # addi $1, $0, 5\n\n0x08000001 // j 4\n").unwrap();
/// assert_eq!(words, vec![0x2001_0005, 0x0800_0001]);
/// ```
pub fn parse_hex(text: &str) -> SimResult<Vec<u32>> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw
            .split_once('#')
            .map_or(raw, |(code, _)| code);
        let line = line
            .split_once("//")
            .map_or(line, |(code, _)| code)
            .trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = (digits.len() <= 8)
            .then(|| u32::from_str_radix(digits, 16).ok())
            .flatten()
            .ok_or_else(|| SimError::MalformedHex {
                line: idx + 1,
                text: line.to_string(),
            })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a hex image file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::MalformedHex`] from [`parse_hex`].
pub fn load_hex_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let bytes = read(path)?;
    parse_hex(&String::from_utf8_lossy(&bytes))
}

/// Reads a raw big-endian binary image.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read and
/// [`SimError::TruncatedBinary`] if its length is not a multiple of four.
pub fn load_binary_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    words_from_be_bytes(&read(path.as_ref())?)
}

/// Splits a byte image into big-endian words.
///
/// # Errors
///
/// Returns [`SimError::TruncatedBinary`] if `bytes` is not a whole number of words.
pub fn words_from_be_bytes(bytes: &[u8]) -> SimResult<Vec<u32>> {
    let chunks = bytes.chunks_exact(INSTRUCTION_BYTES as usize);
    if !chunks.remainder().is_empty() {
        return Err(SimError::TruncatedBinary { len: bytes.len() });
    }
    Ok(chunks
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Loads an image file, choosing the format by extension.
///
/// `.hex` and `.txt` files are parsed as hex text; anything else is raw binary.
///
/// # Errors
///
/// Propagates the errors of [`load_hex_file`] and [`load_binary_file`].
pub fn load_image_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("hex" | "txt") => load_hex_file(path),
        _ => load_binary_file(path),
    }
}
