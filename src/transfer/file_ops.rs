//! Module `file_ops`
//!
//! Consumes the data channel per command: decodes a directory listing into
//! its tokens, or streams incoming bytes into a local file. Neither payload
//! carries a length header; a zero-byte read (peer closed) is the only
//! end-of-transfer signal.

use log::{debug, info};
use std::fs::File;
use std::io::{Read, Write};

/// Reads the listing payload to EOF and splits it on whitespace. Tokens
/// are returned in receipt order; the server does not promise sorting and
/// the client passes the order through verbatim.
pub fn read_listing<R: Read>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;
    debug!("Listing payload: {} bytes", payload.len());

    Ok(String::from_utf8_lossy(&payload)
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

/// Whether the destination name selects text-mode writing.
pub fn is_text_target(dest: &str, text_suffix: &str) -> bool {
    dest.ends_with(text_suffix)
}

/// Streams the data channel into `dest` in bounded chunks until the peer
/// closes. Text targets are decoded before writing; everything else is
/// written raw. The distinction is a local encoding choice only — wire
/// framing is identical either way. Returns the number of payload bytes
/// consumed.
pub fn receive_file<R: Read>(
    mut reader: R,
    dest: &str,
    text_mode: bool,
    chunk_size: usize,
) -> std::io::Result<u64> {
    let mut file = File::create(dest)?;
    let mut buffer = vec![0u8; chunk_size];
    let mut total: u64 = 0;

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        if text_mode {
            file.write_all(String::from_utf8_lossy(&buffer[..n]).as_bytes())?;
        } else {
            file.write_all(&buffer[..n])?;
        }
        total += n as u64;
    }

    file.flush()?;
    drop(file);
    info!("Received {} bytes into {}", total, dest);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_listing_tokens_in_receipt_order() {
        let tokens = read_listing(Cursor::new(b"a.txt b.bin c.txt".to_vec())).unwrap();
        assert_eq!(tokens, vec!["a.txt", "b.bin", "c.txt"]);
    }

    #[test]
    fn test_listing_splits_any_whitespace() {
        let tokens = read_listing(Cursor::new(b"one\ntwo\tthree  four\n".to_vec())).unwrap();
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_empty_listing() {
        let tokens = read_listing(Cursor::new(Vec::new())).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_text_target_matches_suffix_only() {
        assert!(is_text_target("report.txt", ".txt"));
        assert!(!is_text_target("archive.tar", ".txt"));
        // Suffix match, not substring match.
        assert!(!is_text_target("notes.txt.gz", ".txt"));
    }

    #[test]
    fn test_receive_text_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("report.txt");
        let dest = dest.to_str().unwrap();

        let payload = b"twenty-five bytes of text".to_vec();
        assert_eq!(payload.len(), 25);
        let n = receive_file(Cursor::new(payload.clone()), dest, true, 16384).unwrap();

        assert_eq!(n, 25);
        assert_eq!(fs::read(dest).unwrap(), payload);
    }

    #[test]
    fn test_receive_binary_file_across_chunks() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("blob.bin");
        let dest = dest.to_str().unwrap();

        let payload: Vec<u8> = (0..=255).cycle().take(5000).collect();
        // Chunk smaller than the payload to force multiple reads.
        let n = receive_file(Cursor::new(payload.clone()), dest, false, 512).unwrap();

        assert_eq!(n, 5000);
        assert_eq!(fs::read(dest).unwrap(), payload);
    }

    #[test]
    fn test_overwrite_replaces_old_content() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("report.txt");
        fs::write(&dest, "old content that is longer than the new one").unwrap();
        let dest = dest.to_str().unwrap();

        receive_file(Cursor::new(b"new".to_vec()), dest, true, 16384).unwrap();
        assert_eq!(fs::read_to_string(dest).unwrap(), "new");
    }

    #[test]
    fn test_zero_length_transfer_creates_empty_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("empty.bin");
        let dest = dest.to_str().unwrap();

        let n = receive_file(Cursor::new(Vec::new()), dest, false, 16384).unwrap();
        assert_eq!(n, 0);
        assert_eq!(fs::read(dest).unwrap().len(), 0);
    }
}
