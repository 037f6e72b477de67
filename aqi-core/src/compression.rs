//! Gzip helpers for the embedded dataset.
//!
//! The page's `build.rs` gzips the source CSV into `OUT_DIR` and the binary
//! embeds it with `include_bytes!`; the hourly file for 1999-2025 is far
//! smaller compressed.

use anyhow::Context;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Inflate a gzip payload into a UTF-8 string.
///
/// # Errors
///
/// Fails if the payload is not valid gzip or the content is not UTF-8.
pub fn gunzip_to_string(input: &[u8]) -> anyhow::Result<String> {
    let mut decoder = GzDecoder::new(input);
    let mut out = String::new();
    decoder
        .read_to_string(&mut out)
        .context("failed to inflate embedded dataset")?;
    Ok(out)
}

/// Gzip a byte slice at the default compression level.
pub fn gzip(input: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    Ok(encoder.finish()?)
}

/// True if the payload starts with the gzip magic bytes.
pub fn is_gzip(input: &[u8]) -> bool {
    input.starts_with(&[0x1f, 0x8b])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "site_number,date_local\n0004,2017-06-15\n";

    #[test]
    fn gzip_then_gunzip_restores_text() {
        let packed = gzip(CSV.as_bytes()).unwrap();
        assert!(is_gzip(&packed));
        assert_eq!(gunzip_to_string(&packed).unwrap(), CSV);
    }

    #[test]
    fn gunzip_rejects_plain_text() {
        assert!(!is_gzip(CSV.as_bytes()));
        assert!(gunzip_to_string(CSV.as_bytes()).is_err());
    }

    #[test]
    fn empty_payload_compresses_to_empty_text() {
        let packed = gzip(b"").unwrap();
        assert_eq!(gunzip_to_string(&packed).unwrap(), "");
    }
}
