mod state;
mod ui;

use crate::upload::{IncomingFile, UploadStore};
use eframe::{egui, App};
use std::path::PathBuf;

pub use state::{Notice, Refresh, SessionState};

pub struct SarasTutor {
    store: UploadStore,
    state: SessionState,
}

impl SarasTutor {
    pub fn new(_cc: &eframe::CreationContext<'_>, store: UploadStore) -> Self {
        println!("Initializing Saras AI Tutor");
        println!("Upload directory: {}", store.dir().display());
        Self {
            store,
            state: SessionState::default(),
        }
    }

    /// Reads the picked paths and hands them to the store as one batch.
    /// Unreadable files are reported and skipped; the rest still upload.
    pub fn handle_picked_files(&mut self, paths: Vec<PathBuf>) -> Refresh {
        if paths.is_empty() {
            return Refresh::NotNeeded;
        }

        let mut batch = Vec::with_capacity(paths.len());
        let mut read_failures = false;
        for path in &paths {
            match IncomingFile::from_path(path) {
                Ok(file) => batch.push(file),
                Err(e) => {
                    eprintln!("Skipping picked file: {}", e);
                    self.state.warn(e);
                    read_failures = true;
                }
            }
        }

        match self.store.add_files(batch) {
            Ok(0) if !read_failures => Refresh::NotNeeded,
            Ok(0) => Refresh::Needed,
            Ok(added) => {
                println!("Added {} file(s) to the session", added);
                self.state.success("✅ Files uploaded successfully!");
                Refresh::Needed
            }
            Err(e) => {
                eprintln!("Upload failed: {}", e);
                self.state.warn(e);
                Refresh::Needed
            }
        }
    }

    /// Deletes the entry at `index`. A failed disk removal is only a
    /// warning; the entry leaves the list either way.
    pub fn delete_file(&mut self, index: usize) -> Refresh {
        match self.store.delete_at(index) {
            Ok(entry) => {
                println!("Deleted {}", entry.name);
                self.state.success(format!("Deleted {}", entry.name));
            }
            Err(warning) => {
                eprintln!("{}", warning);
                self.state.warn(warning);
            }
        }
        Refresh::Needed
    }

    pub fn clear_all_files(&mut self) -> Refresh {
        if self.store.is_empty() {
            return Refresh::NotNeeded;
        }

        println!("Clearing {} file(s)", self.store.len());
        self.store.clear_all();
        self.state.clear_notice();
        Refresh::Needed
    }

    /// Placeholder action: acknowledges the request without doing any
    /// generation work.
    pub fn generate_lecture(&mut self) -> Refresh {
        self.state
            .success("🎉 Lecture generation started! (Feature coming soon)");
        Refresh::Needed
    }
}

#[cfg(test)]
impl SarasTutor {
    fn with_store(store: UploadStore) -> Self {
        Self {
            store,
            state: SessionState::default(),
        }
    }
}

impl App for SarasTutor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.render(ctx) == Refresh::Needed {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn app() -> (TempDir, SarasTutor) {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path().join("uploads")).unwrap();
        (tmp, SarasTutor::with_store(store))
    }

    fn write_source(tmp: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn picking_files_uploads_and_requests_refresh() {
        let (tmp, mut app) = app();
        let a = write_source(&tmp, "a.pdf", 100);
        let b = write_source(&tmp, "b.pptx", 200);

        let refresh = app.handle_picked_files(vec![a, b]);

        assert_eq!(refresh, Refresh::Needed);
        assert_eq!(app.store.len(), 2);
        assert!(matches!(app.state.notice, Some(Notice::Success(_))));
        assert_eq!(app.store.entries()[0].mime_type, "application/pdf");
    }

    #[test]
    fn repicking_the_same_file_changes_nothing() {
        let (tmp, mut app) = app();
        let a = write_source(&tmp, "a.pdf", 100);

        assert_eq!(app.handle_picked_files(vec![a.clone()]), Refresh::Needed);
        assert_eq!(app.handle_picked_files(vec![a]), Refresh::NotNeeded);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn unreadable_pick_warns_but_keeps_the_rest() {
        let (tmp, mut app) = app();
        let good = write_source(&tmp, "a.pdf", 100);
        let missing = tmp.path().join("missing.pdf");

        let refresh = app.handle_picked_files(vec![missing, good]);

        assert_eq!(refresh, Refresh::Needed);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn all_picks_unreadable_still_shows_the_warning() {
        let (tmp, mut app) = app();
        let missing = tmp.path().join("missing.pdf");

        let refresh = app.handle_picked_files(vec![missing]);

        assert_eq!(refresh, Refresh::Needed);
        assert!(app.store.is_empty());
        assert!(matches!(app.state.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn empty_pick_is_a_no_op() {
        let (_tmp, mut app) = app();
        assert_eq!(app.handle_picked_files(Vec::new()), Refresh::NotNeeded);
    }

    #[test]
    fn delete_with_missing_disk_file_warns_and_still_removes() {
        let (tmp, mut app) = app();
        let a = write_source(&tmp, "a.pdf", 100);
        app.handle_picked_files(vec![a]);

        fs::remove_file(&app.store.entries()[0].path).unwrap();
        let refresh = app.delete_file(0);

        assert_eq!(refresh, Refresh::Needed);
        assert!(app.store.is_empty());
        assert!(matches!(app.state.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn clear_all_on_empty_store_is_a_no_op() {
        let (_tmp, mut app) = app();
        assert_eq!(app.clear_all_files(), Refresh::NotNeeded);
    }

    #[test]
    fn generate_lecture_only_acknowledges() {
        let (tmp, mut app) = app();
        let a = write_source(&tmp, "a.pdf", 100);
        app.handle_picked_files(vec![a]);

        assert_eq!(app.generate_lecture(), Refresh::Needed);
        assert_eq!(app.store.len(), 1);
        assert!(matches!(app.state.notice, Some(Notice::Success(_))));
    }
}
