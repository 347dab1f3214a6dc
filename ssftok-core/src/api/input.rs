//! Input abstraction for the processing API

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Convert input to bytes
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>, Error> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Get text content from input, without a leading byte-order mark
    pub(crate) fn into_text(self) -> Result<String, Error> {
        let bytes = self.into_bytes()?;
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("Invalid UTF-8 encoding: {}", e)))?;

        match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_text_and_bytes() {
        assert_eq!(Input::from_text("राम").into_text().unwrap(), "राम");
        assert_eq!(
            Input::from_bytes("گیا".as_bytes().to_vec()).into_text().unwrap(),
            "گیا"
        );
    }

    #[test]
    fn test_reader() {
        let input = Input::from_reader(Cursor::new(b"line one\nline two".to_vec()));
        assert_eq!(input.into_text().unwrap(), "line one\nline two");
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let bytes = "\u{feff}hello".as_bytes().to_vec();
        assert_eq!(Input::from_bytes(bytes).into_text().unwrap(), "hello");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Input::from_bytes(vec![0xff, 0xfe, 0x00]).into_text().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/ssftok/input.txt")
            .into_text()
            .unwrap_err();
        assert!(matches!(err, Error::Infrastructure(_)));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret text"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
