use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::Error;

/// Reads everything from `reader` as UTF-8, dropping invalid byte sequences.
pub fn read_text_lossy<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_dropping_invalid(&bytes))
}

pub fn read_text_file(path: &Path) -> Result<String, Error> {
    let file = File::open(path).map_err(|e| Error::open(path, e))?;
    read_text_lossy(file)
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_unchanged() {
        let text = read_text_lossy("#1/A ASN 312 ND2 2.950 Å\n".as_bytes()).unwrap();
        assert_eq!(text, "#1/A ASN 312 ND2 2.950 Å\n");
    }

    #[test]
    fn invalid_bytes_are_dropped_not_replaced() {
        let bytes: &[u8] = b"ASN \xff312\xc3 ND2\n";
        let text = read_text_lossy(bytes).unwrap();
        assert_eq!(text, "ASN 312 ND2\n");
        assert!(!text.contains('\u{fffd}'));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_text_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
