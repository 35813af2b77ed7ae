#![doc(html_root_url = "https://docs.rs/espcam_decompress/0.1.0")]
#![doc = include_str!("../README.md")]
#![forbid(missing_docs)]

use std::fs;
use std::path::Path;

pub mod gzip;
pub mod header;
pub mod hex;

/// Errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Header file could not be read as UTF-8 text
    #[error("could not read header file: {0}")]
    Io(#[from] std::io::Error),
    /// Array declaration error
    #[error("header scan error: {0}")]
    Header(#[from] header::HeaderError),
    /// Byte list error
    #[error("hex parse error: {0}")]
    Hex(#[from] hex::HexError),
    /// Gzip stream error
    #[error("gzip decompression error: {0}")]
    Gzip(#[from] gzip::GzipError),
    /// Decompressed page error
    #[error("decompressed page is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Pull the embedded gzip member out of header text, still compressed.
pub fn extract_bytes(source: &str) -> Result<Vec<u8>, Error> {
    let body = header::find_array(source)?;
    Ok(hex::parse_bytes(body)?)
}

/// Decompress the web page embedded in header text.
pub fn decompress_html(source: &str) -> Result<String, Error> {
    let bytes = extract_bytes(source)?;
    let page = gzip::decompress(&bytes)?;
    Ok(String::from_utf8(page)?)
}

/// Decompress the web page embedded in the header file at `path`.
pub fn decompress_html_file(path: impl AsRef<Path>) -> Result<String, Error> {
    let source = fs::read_to_string(path)?;
    decompress_html(&source)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{Compression, write::GzEncoder};
    use tempfile::tempdir;

    use super::*;

    const PAGE: &str = "<html>hi</html>";

    fn gz(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    /// Render bytes the way camera_index.h does: 16 to a line, one-space
    /// indent, trailing comma before the close.
    fn declaration(bytes: &[u8]) -> String {
        let mut out = String::from("const uint8_t index_ov2640_html_gz[] = {");
        for (i, byte) in bytes.iter().enumerate() {
            out.push_str(if i % 16 == 0 { "\n " } else { " " });
            out.push_str(&format!("0x{byte:02X},"));
        }
        out.push_str("\n};\n");
        out
    }

    fn header_for(page: &str) -> String {
        declaration(&gz(page.as_bytes()))
    }

    #[test]
    fn recovers_embedded_page() {
        assert_eq!(decompress_html(&header_for(PAGE)).unwrap(), PAGE);
    }

    #[test]
    fn extract_bytes_returns_the_member_verbatim() {
        let member = gz(PAGE.as_bytes());
        assert_eq!(extract_bytes(&declaration(&member)).unwrap(), member);
    }

    #[test]
    fn tolerates_surrounding_header_noise() {
        let source = format!(
            "//File: index_ov2640.html.gz\n\
             #define index_ov2640_html_gz_len {len}\n\
             {decl}\n\
             const uint8_t index_ov3660_html_gz[] = {{ 0x00 }};\n",
            len = gz(PAGE.as_bytes()).len(),
            decl = header_for(PAGE),
        );
        assert_eq!(decompress_html(&source).unwrap(), PAGE);
    }

    #[test]
    fn missing_declaration_is_a_header_error() {
        let err = decompress_html("static int x;").unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn bad_token_is_a_hex_error() {
        let source = "const uint8_t index_ov2640_html_gz[] = {0x1f, 0xZZ};";
        assert!(matches!(decompress_html(source).unwrap_err(), Error::Hex(_)));
    }

    #[test]
    fn non_gzip_bytes_are_a_gzip_error() {
        let source = declaration(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(decompress_html(&source).unwrap_err(), Error::Gzip(_)));
    }

    #[test]
    fn trailing_garbage_after_the_member_is_a_gzip_error() {
        let mut bytes = gz(PAGE.as_bytes());
        bytes.extend_from_slice(b"GARBAGE");
        let source = declaration(&bytes);
        assert!(matches!(decompress_html(&source).unwrap_err(), Error::Gzip(_)));
    }

    #[test]
    fn non_utf8_page_is_a_utf8_error() {
        let source = declaration(&gz(&[0xff, 0xfe, 0x80]));
        assert!(matches!(decompress_html(&source).unwrap_err(), Error::Utf8(_)));
    }

    #[test]
    fn reads_page_from_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camera_index.h");
        fs::write(&path, header_for(PAGE)).unwrap();
        assert_eq!(decompress_html_file(&path).unwrap(), PAGE);
        assert_eq!(decompress_html_file(&path).unwrap(), PAGE);
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = decompress_html_file(dir.path().join("missing.h")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
