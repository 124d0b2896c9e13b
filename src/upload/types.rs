use std::path::{Path, PathBuf};

pub const PDF_MIME: &str = "application/pdf";
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Metadata for one document tracked by the store. The bytes themselves
/// live on disk at `path`.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub path: PathBuf,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// One item of an upload batch: a picked file that has been read into
/// memory but not yet handed to the store.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let name = path
            .file_name()
            .ok_or("Invalid filename")?
            .to_str()
            .ok_or("Invalid filename encoding")?
            .to_string();

        let bytes = std::fs::read(path)
            .map_err(|e| format!("Failed to read {}: {}", name, e))?;

        Ok(Self {
            mime_type: mime_for_path(path).to_string(),
            name,
            bytes,
        })
    }
}

/// Counts derived from the store contents. Everything that is not a PDF
/// falls into `other_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadStats {
    pub total: usize,
    pub pdf_count: usize,
    pub other_count: usize,
}

/// Maps a file extension to the MIME type recorded for the entry.
pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("pdf") => PDF_MIME,
        Some("pptx") => PPTX_MIME,
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(mime_for_path(Path::new("slides.pdf")), PDF_MIME);
        assert_eq!(mime_for_path(Path::new("SLIDES.PDF")), PDF_MIME);
        assert_eq!(mime_for_path(Path::new("deck.pptx")), PPTX_MIME);
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
