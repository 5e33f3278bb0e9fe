//! Encoding-resilient file reading.
//!
//! Decode cascade, first success wins:
//! 1. BOM sniffing, then strict UTF-8.
//! 2. Statistical detection (`chardetng`) over the leading chunk, then a
//!    strict decode with the detected encoding.
//! 3. windows-1252 lossy decode, which cannot fail.
//!
//! Filesystem errors and oversized files produce a placeholder string so
//! the output stays index-aligned with the input paths.

use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::constants::crawl::DETECTOR_CHUNK_SIZE;

/// Reads every path into a decoded string, one output per input, in order.
pub fn read_files(paths: &[PathBuf], max_file_size: u64) -> Vec<String> {
    paths
        .iter()
        .map(|path| read_file_text(path, max_file_size))
        .collect()
}

/// Reads one file through the decode cascade.
///
/// Never fails: unreadable or oversized files yield a placeholder comment
/// naming the file.
pub fn read_file_text(path: &Path, max_file_size: u64) -> String {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > max_file_size => {
            tracing::warn!(
                "Skipping content of {} ({} bytes exceeds limit of {})",
                path.display(),
                meta.len(),
                max_file_size
            );
            return placeholder(path);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!("Could not stat {}: {}", path.display(), e);
            return placeholder(path);
        }
    }

    match fs::read(path) {
        Ok(bytes) => decode_bytes(&bytes),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            placeholder(path)
        }
    }
}

fn placeholder(path: &Path) -> String {
    format!("// Unable to read file: {}", path.display())
}

fn decode_bytes(bytes: &[u8]) -> String {
    // Stage 1: declared or default encoding, strictly.
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        if let Some(text) = strict_decode(encoding, bytes) {
            return text;
        }
    } else if let Some(text) = strict_decode(UTF_8, bytes) {
        return text;
    }

    // Stage 2: statistical detection over the leading chunk.
    let chunk_len = bytes.len().min(DETECTOR_CHUNK_SIZE);
    let mut detector = EncodingDetector::new();
    detector.feed(&bytes[..chunk_len], chunk_len == bytes.len());
    let detected = detector.guess(None, true);
    if detected != UTF_8 {
        if let Some(text) = strict_decode(detected, bytes) {
            tracing::debug!("Decoded via detected encoding {}", detected.name());
            return text;
        }
    }

    // Stage 3: single-byte fallback, every byte maps.
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

fn strict_decode(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}
