// src/source/mod.rs
//! Acquiring excerpt text from files on disk.

use std::fs;
use std::path::Path;

use crate::utils::error::DocumentError;

/// Kind of document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "txt" | "text" => Ok(DocumentKind::Text),
            "pdf" => Ok(DocumentKind::Pdf),
            _ => Err(DocumentError::UnsupportedType(path.display().to_string())),
        }
    }
}

/// Reads the full text of an excerpt. PDFs are converted page by page into
/// one concatenated string.
pub fn load_text(path: &Path) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_path(path)?;
    tracing::info!("Loading {:?} document from {}", kind, path.display());

    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let text = match kind {
        DocumentKind::Text => String::from_utf8_lossy(&bytes).into_owned(),
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            DocumentError::PdfConversion {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?,
    };

    tracing::debug!("Loaded {} characters from {}", text.chars().count(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("a/AD.PDF")).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("a.txt")).unwrap(), DocumentKind::Text);
        assert!(matches!(
            DocumentKind::from_path(Path::new("a.docx")),
            Err(DocumentError::UnsupportedType(_))
        ));
    }

    #[test]
    fn reads_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("excerpt.txt");
        fs::write(&path, "1. a) Firma:\nTestfirma GmbH\n").unwrap();
        assert_eq!(load_text(&path).unwrap(), "1. a) Firma:\nTestfirma GmbH\n");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_text(Path::new("/nonexistent/excerpt.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn broken_pdf_is_a_conversion_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not a pdf").unwrap();
        assert!(matches!(load_text(&path), Err(DocumentError::PdfConversion { .. })));
    }
}
