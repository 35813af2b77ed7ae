//! Locates the gzipped page array inside ESP32 camera header text.
//!
//! Firmware headers like `camera_index.h` embed each web page as a C byte
//! array. This module captures the text between the braces of the one
//! declaration this crate cares about; turning that text into bytes is
//! [`crate::hex`]'s job.

/// Name of the byte array holding the gzipped OV2640 page.
pub const ARRAY_NAME: &str = "index_ov2640_html_gz";

const OPEN_MARKER: &str = "const uint8_t index_ov2640_html_gz[] = {";
const CLOSE_MARKER: &str = "};";

/// Errors
#[derive(thiserror::Error, Debug)]
pub enum HeaderError {
    /// The declaration is absent from the header text
    #[error("array `{ARRAY_NAME}` not declared in header")]
    ArrayNotFound,
    /// The declaration opens but never closes with `};`
    #[error("array `{ARRAY_NAME}` declaration is unterminated")]
    Unterminated,
}

/// Capture the text between the braces of the array declaration.
///
/// The scan is two-phase: find the exact opening marker, then stop at the
/// first `};` after it, so the capture never runs past the declaration even
/// when more arrays follow. Newlines inside the braces are kept as-is.
pub fn find_array(source: &str) -> Result<&str, HeaderError> {
    let open = source.find(OPEN_MARKER).ok_or(HeaderError::ArrayNotFound)?;
    let body = open + OPEN_MARKER.len();
    let len = source[body..]
        .find(CLOSE_MARKER)
        .ok_or(HeaderError::Unterminated)?;
    Ok(&source[body..body + len])
}
