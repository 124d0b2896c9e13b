mod store;
mod types;

pub use store::UploadStore;
pub use types::{mime_for_path, IncomingFile, UploadStats, UploadedFile, PDF_MIME};
