//! Page file reading and shared loading state.

use eduhack::{JsonPageReader, PageDocument, PageReader};
use std::path::{Path, PathBuf};

/// Progress of the current page load, shared with the worker thread.
///
/// Results travel through a channel; only this bookkeeping is behind the
/// `Arc<Mutex<>>`.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True while a worker is reading a file
    pub in_progress: bool,
    /// File being read, for the loading indicator
    pub source: Option<PathBuf>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, path: &Path) {
        self.in_progress = true;
        self.source = Some(path.to_path_buf());
    }

    pub fn finish(&mut self) {
        self.in_progress = false;
        self.source = None;
    }
}

/// Reads and parses a page file, flattening the error chain for display.
pub fn read_page_file(path: &Path) -> Result<PageDocument, String> {
    let path_string = path.to_string_lossy();
    JsonPageReader::new()
        .read(&path_string)
        .map_err(|e| format!("{:#}", e))
}
