use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Decode a base64 encoded favicon and write it into `dir`
///
/// The file is named `favicon` plus an extension guessed from the image's
/// magic bytes, or no extension when the format is unrecognized. An existing
/// file of the same name is overwritten. Returns the written path.
pub fn save_favicon_to(dir: &Path, encoded: &str) -> Result<PathBuf> {
    let icon = STANDARD.decode(encoded)?;

    let extension = image::guess_format(&icon)
        .ok()
        .and_then(|format| format.extensions_str().first())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let path = dir.join(format!("favicon{}", extension));
    fs::write(&path, &icon)?;

    ::log::info!("Saved {} favicon bytes to {}", icon.len(), path.display());
    Ok(path)
}

/// Save a favicon into the current working directory
pub fn save_favicon(encoded: &str) -> Result<PathBuf> {
    save_favicon_to(Path::new("."), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(bytes: &[u8]) -> (PathBuf, Vec<u8>) {
        let dir = tempfile::tempdir().unwrap();
        let path = save_favicon_to(dir.path(), &STANDARD.encode(bytes)).unwrap();
        let read_back = fs::read(&path).unwrap();
        (path, read_back)
    }

    #[test]
    fn test_roundtrip_png() {
        let bytes = b"\x89PNG\r\n\x1a\n rest of the image";
        let (path, read_back) = roundtrip(bytes);

        assert_eq!(path.file_name().unwrap(), "favicon.png");
        assert_eq!(read_back, bytes);
    }

    #[test]
    fn test_roundtrip_ico() {
        let bytes = &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x10];
        let (path, read_back) = roundtrip(bytes);

        assert_eq!(path.file_name().unwrap(), "favicon.ico");
        assert_eq!(read_back, bytes);
    }

    #[test]
    fn test_unrecognized_bytes_get_no_extension() {
        let bytes = b"not an image at all";
        let (path, read_back) = roundtrip(bytes);

        assert_eq!(path.file_name().unwrap(), "favicon");
        assert_eq!(read_back, bytes);
    }

    #[test]
    fn test_empty_payload_roundtrips() {
        let (path, read_back) = roundtrip(&[]);

        assert_eq!(path.file_name().unwrap(), "favicon");
        assert!(read_back.is_empty());
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        save_favicon_to(dir.path(), &STANDARD.encode(b"first")).unwrap();
        let path = save_favicon_to(dir.path(), &STANDARD.encode(b"second")).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_favicon_to(dir.path(), "not base64!").unwrap_err();

        assert!(matches!(err, crate::error::ResolveError::Decode(_)));
    }
}
