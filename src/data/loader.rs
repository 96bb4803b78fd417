// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads a plain text corpus from disk and returns its lines.
//
// Supported encodings:
//   utf-8   — strict; invalid byte sequences are an error
//   latin-1 — every byte maps to the code point of the same value
//
// A leading byte order mark is removed from UTF-8 input so it
// never ends up glued to the first token.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{fmt, fs, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, WordIterError};
use crate::domain::traits::CorpusSource;

/// Text encodings the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Canonical name, also accepted by `from_str`
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8   => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Decode raw bytes, or None if they are not valid in this encoding
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let text = String::from_utf8(bytes).ok()?;
                match text.strip_prefix('\u{FEFF}') {
                    Some(rest) => Some(rest.to_string()),
                    None       => Some(text),
                }
            }
            // Latin-1 bytes are exactly the first 256 Unicode scalar values
            TextEncoding::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = WordIterError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "utf8"                                 => Ok(TextEncoding::Utf8),
            "latin1" | "iso88591" | "l1"           => Ok(TextEncoding::Latin1),
            _ => Err(WordIterError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Loads one text file as the corpus.
/// Implements the CorpusSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct TextFileLoader {
    path:     PathBuf,
    encoding: TextEncoding,
}

impl TextFileLoader {
    pub fn new(path: impl Into<PathBuf>, encoding: TextEncoding) -> Self {
        Self { path: path.into(), encoding }
    }
}

impl CorpusSource for TextFileLoader {
    fn load_lines(&self) -> Result<Vec<String>> {
        let bytes = fs::read(&self.path).map_err(|source| WordIterError::Io {
            path: self.path.clone(),
            source,
        })?;
        let size = bytes.len();

        let text = self.encoding.decode(bytes).ok_or_else(|| WordIterError::Decode {
            path:     self.path.clone(),
            encoding: self.encoding.name(),
        })?;

        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        tracing::debug!(
            "Read '{}' ({} bytes, {}, {} lines)",
            self.path.display(),
            size,
            self.encoding,
            lines.len()
        );
        Ok(lines)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_encoding_names_parse() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("utf8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("ISO-8859-1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert!(matches!(
            "shift_jis".parse::<TextEncoding>(),
            Err(WordIterError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_reads_lines_in_order() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "the cat\n\nsat down\n").unwrap();

        let lines = TextFileLoader::new(f.path(), TextEncoding::Utf8)
            .load_lines()
            .unwrap();
        assert_eq!(lines, vec!["the cat", "", "sat down"]);
    }

    #[test]
    fn test_strips_utf8_bom() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"\xEF\xBB\xBFhello world").unwrap();

        let lines = TextFileLoader::new(f.path(), TextEncoding::Utf8)
            .load_lines()
            .unwrap();
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn test_latin1_decodes_high_bytes() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        // "café" in Latin-1
        f.write_all(b"caf\xE9").unwrap();

        let lines = TextFileLoader::new(f.path(), TextEncoding::Latin1)
            .load_lines()
            .unwrap();
        assert_eq!(lines, vec!["café"]);

        // Same bytes are not valid UTF-8
        let err = TextFileLoader::new(f.path(), TextEncoding::Utf8)
            .load_lines()
            .unwrap_err();
        assert!(matches!(err, WordIterError::Decode { .. }));
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err  = TextFileLoader::new(&path, TextEncoding::Utf8)
            .load_lines()
            .unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
