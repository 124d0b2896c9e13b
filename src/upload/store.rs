use crate::upload::types::{IncomingFile, UploadStats, UploadedFile, PDF_MIME};
use std::fs;
use std::path::PathBuf;

/// In-memory registry of uploaded files, mirrored to an on-disk directory.
/// Entries are insertion-ordered and unique by name. While an entry is
/// present its `path` exists on disk, except right after a failed disk
/// deletion (the entry is dropped anyway, see `delete_at`).
pub struct UploadStore {
    dir: PathBuf,
    entries: Vec<UploadedFile>,
}

impl UploadStore {
    /// Creates an empty store backed by `dir`, creating the directory if
    /// it does not exist yet.
    pub fn new(dir: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            entries: Vec::new(),
        })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub fn entries(&self) -> &[UploadedFile] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persists each batch item to disk and appends its metadata. A name
    /// already in the store is skipped silently, never overwritten.
    /// Returns how many entries were actually added; a write failure
    /// aborts the rest of the batch but keeps what was added before it.
    pub fn add_files(
        &mut self,
        batch: impl IntoIterator<Item = IncomingFile>,
    ) -> Result<usize, String> {
        let mut added = 0;

        for file in batch {
            if self.entries.iter().any(|f| f.name == file.name) {
                continue;
            }

            let path = self.dir.join(&file.name);
            fs::write(&path, &file.bytes)
                .map_err(|e| format!("Failed to save {}: {}", file.name, e))?;

            self.entries.push(UploadedFile {
                name: file.name,
                path,
                mime_type: file.mime_type,
                size_bytes: file.bytes.len() as u64,
            });
            added += 1;
        }

        Ok(added)
    }

    pub fn stats(&self) -> UploadStats {
        let total = self.entries.len();
        let pdf_count = self
            .entries
            .iter()
            .filter(|f| f.mime_type == PDF_MIME)
            .count();

        UploadStats {
            total,
            pdf_count,
            other_count: total - pdf_count,
        }
    }

    /// Removes the entry at `index` along with its disk file. The entry
    /// leaves the in-memory list even when the disk deletion fails; the
    /// returned `Err` is a warning for the user, not a rollback. Panics
    /// if `index` is out of range.
    pub fn delete_at(&mut self, index: usize) -> Result<UploadedFile, String> {
        let entry = self.entries.remove(index);

        match fs::remove_file(&entry.path) {
            Ok(()) => Ok(entry),
            Err(e) => Err(format!("Failed to delete {}: {}", entry.name, e)),
        }
    }

    /// Best-effort removal of every entry's disk file, then resets the
    /// store to empty. Individual deletion failures are ignored.
    pub fn clear_all(&mut self) {
        for entry in &self.entries {
            let _ = fs::remove_file(&entry.path);
        }
        self.entries.clear();
    }
}
