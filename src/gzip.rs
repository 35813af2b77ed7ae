//! Inflates the gzip payload recovered from the header.

use std::io::{self, Read};

use flate2::read::MultiGzDecoder;

/// Magic bytes opening every gzip member (RFC 1952).
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Errors
#[derive(thiserror::Error, Debug)]
pub enum GzipError {
    /// The buffer does not open with the gzip magic bytes
    #[error("missing gzip magic bytes")]
    BadMagic,
    /// A member is damaged, or trailed by bytes that are not another member
    #[error("corrupt gzip stream: {0}")]
    Corrupt(#[from] io::Error),
}

/// Decompress the gzip payload into raw bytes.
///
/// Concatenated members inflate into one buffer, in order. The buffer must
/// be gzip from the first byte to the last: anything left over after the
/// final member makes the stream invalid.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, GzipError> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Err(GzipError::BadMagic);
    }
    let mut decoder = MultiGzDecoder::new(bytes);
    let mut inflated = Vec::new();
    decoder.read_to_end(&mut inflated)?;
    Ok(inflated)
}
